use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use entity::booking::BookingStatus;

use crate::{
    data::availability::AvailabilityRepository,
    error::{booking::BookingError, AppError},
    model::booking::CreateBookingDto,
    service::booking::BookingService,
};

mod cancel;
mod create;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
