use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        payment::{CreatePaymentDto, PaymentDto},
    },
    service::payment::PaymentService,
    state::AppState,
};

pub static PAYMENT_TAG: &str = "payment";

#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded; a pending booking is confirmed", body = PaymentDto),
        (status = 400, description = "Amount is not positive", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking already has a payment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payment = PaymentService::create(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(PaymentDto::from(payment))))
}

#[utoipa::path(
    get,
    path = "/api/payments/booking/{id}",
    tag = PAYMENT_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Payment for the booking", body = PaymentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "No payment recorded for the booking", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment_by_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payment = PaymentService::find_by_booking_id(&state.db, id).await?;

    Ok((StatusCode::OK, Json(PaymentDto::from(payment))))
}
