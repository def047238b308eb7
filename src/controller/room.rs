use axum::{
    extract::{Path, Query, State},
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
        room::{CreateRoomDto, RoomDto, RoomFilter},
    },
    service::room::RoomService,
    state::AppState,
};

pub static ROOM_TAG: &str = "room";

#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Referenced hotel does not exist", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let room = RoomService::create(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(RoomDto::from(room))))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room detail", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::get(&state.db, id).await?;

    Ok((StatusCode::OK, Json(RoomDto::from(room))))
}

#[utoipa::path(
    get,
    path = "/api/rooms/filter",
    tag = ROOM_TAG,
    params(
        ("hotel_id" = Option<i32>, Query, description = "Restrict to one hotel"),
        ("room_type" = Option<String>, Query, description = "Exact room type"),
        ("min_price" = Option<f64>, Query, description = "Minimum nightly price"),
        ("max_price" = Option<f64>, Query, description = "Maximum nightly price"),
        ("min_capacity" = Option<i32>, Query, description = "Minimum guest capacity"),
        ("has_wifi" = Option<bool>, Query, description = "Require wifi"),
        ("allows_pets" = Option<bool>, Query, description = "Require pets allowed"),
        ("has_air_conditioning" = Option<bool>, Query, description = "Require air conditioning"),
        ("has_tv" = Option<bool>, Query, description = "Require a TV"),
        ("has_minibar" = Option<bool>, Query, description = "Require a minibar"),
        ("has_balcony" = Option<bool>, Query, description = "Require a balcony"),
        ("has_kitchen" = Option<bool>, Query, description = "Require a kitchen"),
        ("has_safe" = Option<bool>, Query, description = "Require a safe")
    ),
    responses(
        (status = 200, description = "Rooms matching every present filter", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_rooms(
    State(state): State<AppState>,
    Query(filter): Query<RoomFilter>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::filter(&state.db, filter).await?;

    Ok((
        StatusCode::OK,
        Json(rooms.into_iter().map(RoomDto::from).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{id}/rooms",
    tag = ROOM_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Rooms of the hotel", body = Vec<RoomDto>),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_rooms_by_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::list_by_hotel(&state.db, id).await?;

    Ok((
        StatusCode::OK,
        Json(rooms.into_iter().map(RoomDto::from).collect::<Vec<_>>()),
    ))
}
