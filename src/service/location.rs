//! Countries, cities, and the destination autocomplete.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::location::LocationRepository,
    error::AppError,
    model::location::{
        CitySuggestionDto, CreateCityDto, CreateCountryDto, LocationSuggestionsDto,
    },
};

pub struct LocationService;

impl LocationService {
    pub async fn create_country(
        db: &DatabaseConnection,
        dto: CreateCountryDto,
    ) -> Result<entity::country::Model, AppError> {
        match LocationRepository::new(db).create_country(dto.name).await {
            Ok(country) => Ok(country),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Err(
                AppError::BadRequest("Country already exists".to_string()),
            ),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list_countries(
        db: &DatabaseConnection,
    ) -> Result<Vec<entity::country::Model>, AppError> {
        Ok(LocationRepository::new(db).list_countries().await?)
    }

    pub async fn create_city(
        db: &DatabaseConnection,
        dto: CreateCityDto,
    ) -> Result<entity::city::Model, AppError> {
        let locations = LocationRepository::new(db);

        locations
            .find_country_by_id(dto.country_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Country {} does not exist", dto.country_id))
            })?;

        Ok(locations.create_city(dto.name, dto.country_id).await?)
    }

    pub async fn list_cities(
        db: &DatabaseConnection,
        country_id: Option<i32>,
    ) -> Result<Vec<entity::city::Model>, AppError> {
        Ok(LocationRepository::new(db).list_cities(country_id).await?)
    }

    /// Prefix autocomplete for the destination search box: up to five
    /// matching cities (with their country names) and five countries.
    pub async fn search(
        db: &DatabaseConnection,
        prefix: &str,
    ) -> Result<LocationSuggestionsDto, AppError> {
        let (cities, countries) = LocationRepository::new(db).search(prefix).await?;

        Ok(LocationSuggestionsDto {
            cities: cities
                .into_iter()
                .map(|(city, country)| CitySuggestionDto {
                    id: city.id,
                    name: city.name,
                    country_name: country.map(|country| country.name).unwrap_or_default(),
                })
                .collect(),
            countries: countries.into_iter().map(Into::into).collect(),
        })
    }
}
