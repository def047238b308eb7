//! Country and city DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateCountryDto {
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::country::Model> for CountryDto {
    fn from(country: entity::country::Model) -> Self {
        Self {
            id: country.id,
            name: country.name,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateCityDto {
    pub name: String,
    pub country_id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub country_id: i32,
}

impl From<entity::city::Model> for CityDto {
    fn from(city: entity::city::Model) -> Self {
        Self {
            id: city.id,
            name: city.name,
            country_id: city.country_id,
        }
    }
}

/// One autocomplete suggestion for a city, carrying its country name so the
/// client can render "City, Country".
#[derive(Serialize, ToSchema)]
pub struct CitySuggestionDto {
    pub id: i32,
    pub name: String,
    pub country_name: String,
}

/// Autocomplete payload for the location search box.
#[derive(Serialize, ToSchema)]
pub struct LocationSuggestionsDto {
    pub cities: Vec<CitySuggestionDto>,
    pub countries: Vec<CountryDto>,
}
