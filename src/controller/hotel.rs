use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::ErrorDto,
        hotel::{CreateHotelDto, CreateHotelPhotoDto, HotelDetailDto, HotelDto, HotelPhotoDto},
        search::{HotelSearchResultDto, SearchRequestDto},
    },
    service::{hotel::HotelService, search::SearchService},
    state::AppState,
};

pub static HOTEL_TAG: &str = "hotel";

#[utoipa::path(
    post,
    path = "/api/hotels",
    tag = HOTEL_TAG,
    request_body = CreateHotelDto,
    responses(
        (status = 201, description = "Hotel created", body = HotelDto),
        (status = 400, description = "Referenced city or owner does not exist", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let hotel = HotelService::create(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(HotelDto::from(hotel))))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Hotel with its city, rooms, and photos", body = HotelDetailDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let detail = HotelService::get_detail(&state.db, id).await?;

    Ok((StatusCode::OK, Json(detail)))
}

#[utoipa::path(
    post,
    path = "/api/hotels/search-available",
    tag = HOTEL_TAG,
    request_body = SearchRequestDto,
    responses(
        (status = 200, description = "Hotels with enough free rooms for the request", body = Vec<HotelSearchResultDto>),
        (status = 400, description = "Invalid date range or room count", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_available(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let results = SearchService::search(&state.db, payload).await?;

    Ok((StatusCode::OK, Json(results)))
}

#[utoipa::path(
    post,
    path = "/api/hotels/{id}/photos",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    request_body = CreateHotelPhotoDto,
    responses(
        (status = 201, description = "Photo added; a new cover demotes the previous one", body = HotelPhotoDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_hotel_photo(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateHotelPhotoDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let photo = HotelService::add_photo(&state.db, id, payload).await?;

    Ok((StatusCode::CREATED, Json(HotelPhotoDto::from(photo))))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{id}/photos",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Photos of the hotel", body = Vec<HotelPhotoDto>),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_hotel_photos(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let photos = HotelService::list_photos(&state.db, id).await?;

    Ok((
        StatusCode::OK,
        Json(
            photos
                .into_iter()
                .map(HotelPhotoDto::from)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/cities/{id}/hotels",
    tag = HOTEL_TAG,
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Hotels in the city", body = Vec<HotelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_hotels_by_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = HotelService::list_by_city(&state.db, id).await?;

    Ok((
        StatusCode::OK,
        Json(hotels.into_iter().map(HotelDto::from).collect::<Vec<_>>()),
    ))
}
