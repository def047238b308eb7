use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum BookingError {
    /// Check-out date is not strictly after check-in date.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Check-out date must be after check-in date")]
    InvalidRange,

    /// The room has at least one blocked date inside the requested range,
    /// or a concurrent booking claimed a date first.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Room is not available for the requested dates")]
    RoomUnavailable,

    /// The booking is not in a status that permits the requested transition.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Booking is in status '{status}' and cannot be {action}")]
    InvalidState { status: String, action: String },

    /// A cancellation record already exists for this booking.
    ///
    /// Results in a 409 Conflict response.
    #[error("Booking already has a cancellation record")]
    DuplicateCancellation,

    /// A payment record already exists for this booking.
    ///
    /// Results in a 409 Conflict response.
    #[error("Booking already has a payment record")]
    DuplicatePayment,

    /// Manual availability entry targets a date that is already blocked.
    ///
    /// Results in a 409 Conflict response.
    #[error("Date is already blocked for this room")]
    DateAlreadyBlocked,
}

/// Converts booking domain errors into HTTP responses.
///
/// Validation failures map to 400 Bad Request; conflicts with existing
/// records map to 409 Conflict. The error display strings double as the
/// client-facing messages since they carry no internal detail.
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidRange | Self::RoomUnavailable | Self::InvalidState { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::DuplicateCancellation | Self::DuplicatePayment | Self::DateAlreadyBlocked => {
                StatusCode::CONFLICT
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
