use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{data::room::RoomRepository, model::room::RoomFilter};

mod filter;
