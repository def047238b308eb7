use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::ErrorDto,
        booking::{
            BookingDetailDto, BookingDto, CancelBookingDto, CancellationDto, CreateBookingDto,
            SweepReportDto,
        },
    },
    service::{booking::BookingService, lifecycle::LifecycleService},
    state::AppState,
};

pub static BOOKING_TAG: &str = "booking";

#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created with its dates blocked", body = BookingDto),
        (status = 400, description = "Invalid date range or room unavailable", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::create(&state.db, user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(BookingDto::from(booking))))
}

#[utoipa::path(
    get,
    path = "/api/bookings/my-bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Caller's bookings, most recent stay first", body = Vec<BookingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bookings = BookingService::list_for_user(&state.db, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            bookings
                .into_iter()
                .map(BookingDto::from)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking with room, payment, cancellation, and reviews", body = BookingDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = BookingService::get_with_relations(&state.db, id).await?;

    if detail.booking.user_id != Some(user.id) && !user.admin {
        return Err(AuthError::AccessDenied(user.id, format!("view booking {id}")).into());
    }

    Ok((StatusCode::OK, Json(detail)))
}

#[utoipa::path(
    post,
    path = "/api/bookings/{id}/confirm",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking confirmed", body = BookingDto),
        (status = 400, description = "Booking is not pending", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = BookingService::get_with_relations(&state.db, id).await?;
    if detail.booking.user_id != Some(user.id) && !user.admin {
        return Err(AuthError::AccessDenied(user.id, format!("confirm booking {id}")).into());
    }

    let booking = BookingService::confirm(&state.db, id).await?;

    Ok((StatusCode::OK, Json(BookingDto::from(booking))))
}

#[utoipa::path(
    post,
    path = "/api/bookings/{id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = CancelBookingDto,
    responses(
        (status = 200, description = "Booking cancelled with the given refund", body = CancellationDto),
        (status = 400, description = "Booking is already cancelled or completed", body = ErrorDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Cancellation record already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CancelBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let cancellation =
        BookingService::cancel(&state.db, id, payload.refund_amount.unwrap_or(0.0)).await?;

    Ok((StatusCode::OK, Json(CancellationDto::from(cancellation))))
}

#[utoipa::path(
    post,
    path = "/api/bookings/my-bookings/{id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = CancellationDto),
        (status = 400, description = "Booking is already cancelled or completed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_my_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = BookingService::get_with_relations(&state.db, id).await?;
    if detail.booking.user_id != Some(user.id) {
        return Err(AuthError::AccessDenied(user.id, format!("cancel booking {id}")).into());
    }

    // Self-service cancellation never grants a refund; refunds go through
    // the admin endpoint.
    let cancellation = BookingService::cancel(&state.db, id, 0.0).await?;

    Ok((StatusCode::OK, Json(CancellationDto::from(cancellation))))
}

#[utoipa::path(
    post,
    path = "/api/bookings/cleanup",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Sweep finished", body = SweepReportDto),
        (status = 401, description = "User not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cleanup_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let report = LifecycleService::sweep(&state.db, Utc::now().date_naive()).await?;

    Ok((StatusCode::OK, Json(report)))
}
