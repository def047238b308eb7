use axum::{
    extract::{Query, State},
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
        availability::{
            AvailabilityCheckDto, AvailabilityEntryDto, AvailabilityRangeQuery,
            CreateAvailabilityDto,
        },
    },
    service::availability::AvailabilityService,
    state::AppState,
};

pub static AVAILABILITY_TAG: &str = "availability";

#[utoipa::path(
    get,
    path = "/api/availability/check",
    tag = AVAILABILITY_TAG,
    params(
        ("room_id" = i32, Query, description = "Room ID"),
        ("check_in_date" = String, Query, description = "Check-in date (YYYY-MM-DD)"),
        ("check_out_date" = String, Query, description = "Check-out date, exclusive (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Whether the room is free for the whole range", body = AvailabilityCheckDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let room_id = query.room_id;
    let check_in_date = query.check_in_date;
    let check_out_date = query.check_out_date;

    let available = AvailabilityService::check(&state.db, query).await?;

    Ok((
        StatusCode::OK,
        Json(AvailabilityCheckDto {
            room_id,
            check_in_date,
            check_out_date,
            available,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/availability/unavailable",
    tag = AVAILABILITY_TAG,
    params(
        ("room_id" = i32, Query, description = "Room ID"),
        ("check_in_date" = String, Query, description = "Range start (YYYY-MM-DD)"),
        ("check_out_date" = String, Query, description = "Range end, exclusive (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Blocked ledger entries in the range", body = Vec<AvailabilityEntryDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_unavailable(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let entries = AvailabilityService::list_unavailable(&state.db, query).await?;

    Ok((
        StatusCode::OK,
        Json(
            entries
                .into_iter()
                .map(AvailabilityEntryDto::from)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/availability",
    tag = AVAILABILITY_TAG,
    request_body = CreateAvailabilityDto,
    responses(
        (status = 201, description = "Ledger entry created or updated", body = AvailabilityEntryDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Date is already blocked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_availability(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAvailabilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entry = AvailabilityService::create_entry(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(AvailabilityEntryDto::from(entry))))
}
