use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use entity::booking::BookingStatus;

use crate::{
    error::{auth::AuthError, booking::BookingError, AppError},
    model::review::CreateReviewDto,
    service::review::ReviewService,
};

mod create;
