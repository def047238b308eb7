use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::data::photo::PhotoRepository;

mod add;
mod cover_for_hotel;
