use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use entity::booking::BookingStatus;

use crate::{
    data::availability::AvailabilityRepository,
    error::{booking::BookingError, AppError},
    model::search::{SearchRequestDto, SortBy},
    service::search::SearchService,
};

mod resolve_destination;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn request(destination: &str) -> SearchRequestDto {
    SearchRequestDto {
        destination: destination.to_string(),
        check_in_date: date(2026, 9, 1),
        check_out_date: date(2026, 9, 4),
        rooms: 1,
        adults: 2,
        min_stars: None,
        sort_by: None,
    }
}

/// Seeds a named country and city with one hotel owned by a fresh user.
async fn seed_destination(
    db: &DatabaseConnection,
    country: &str,
    city: &str,
) -> Result<(entity::user::Model, entity::hotel::Model), DbErr> {
    let user = factory::create_user(db).await?;
    let country = factory::country::CountryFactory::new(db)
        .name(country)
        .build()
        .await?;
    let city = factory::city::CityFactory::new(db, country.id)
        .name(city)
        .build()
        .await?;
    let hotel = factory::create_hotel(db, city.id, Some(user.id)).await?;

    Ok((user, hotel))
}
