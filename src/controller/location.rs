use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::ToSchema;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::ErrorDto,
        location::{
            CityDto, CountryDto, CreateCityDto, CreateCountryDto, LocationSuggestionsDto,
        },
    },
    service::location::LocationService,
    state::AppState,
};

pub static LOCATION_TAG: &str = "location";

#[derive(Deserialize, ToSchema)]
pub struct LocationSearchQuery {
    pub q: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CityListQuery {
    pub country_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/locations/search",
    tag = LOCATION_TAG,
    params(
        ("q" = String, Query, description = "Name prefix to match")
    ),
    responses(
        (status = 200, description = "Up to five matching cities and five countries", body = LocationSuggestionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let suggestions = LocationService::search(&state.db, &query.q).await?;

    Ok((StatusCode::OK, Json(suggestions)))
}

#[utoipa::path(
    post,
    path = "/api/countries",
    tag = LOCATION_TAG,
    request_body = CreateCountryDto,
    responses(
        (status = 201, description = "Country created", body = CountryDto),
        (status = 400, description = "Country already exists", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_country(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let country = LocationService::create_country(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(CountryDto::from(country))))
}

#[utoipa::path(
    get,
    path = "/api/countries",
    tag = LOCATION_TAG,
    responses(
        (status = 200, description = "All countries, alphabetically", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let countries = LocationService::list_countries(&state.db).await?;

    Ok((
        StatusCode::OK,
        Json(
            countries
                .into_iter()
                .map(CountryDto::from)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/cities",
    tag = LOCATION_TAG,
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "City created", body = CityDto),
        (status = 400, description = "Referenced country does not exist", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let city = LocationService::create_city(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(CityDto::from(city))))
}

#[utoipa::path(
    get,
    path = "/api/cities",
    tag = LOCATION_TAG,
    params(
        ("country_id" = Option<i32>, Query, description = "Restrict to one country")
    ),
    responses(
        (status = 200, description = "Cities, alphabetically", body = Vec<CityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cities(
    State(state): State<AppState>,
    Query(query): Query<CityListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let cities = LocationService::list_cities(&state.db, query.country_id).await?;

    Ok((
        StatusCode::OK,
        Json(cities.into_iter().map(CityDto::from).collect::<Vec<_>>()),
    ))
}
