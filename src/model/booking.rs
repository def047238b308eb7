//! Booking DTOs and the wire form of the booking status.

use chrono::NaiveDate;
use entity::booking::BookingStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{payment::PaymentDto, review::ReviewDto, room::RoomDto};

/// Wire representation of a booking status.
///
/// The entity crate keeps its `BookingStatus` free of serde so the DTO layer
/// owns the JSON casing here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatusDto {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl From<BookingStatus> for BookingStatusDto {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Confirmed => Self::Confirmed,
            BookingStatus::Cancelled => Self::Cancelled,
            BookingStatus::Completed => Self::Completed,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub room_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub additional_info: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub room_id: Option<i32>,
    pub booking_date: NaiveDate,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatusDto,
    pub additional_info: Option<String>,
}

impl From<entity::booking::Model> for BookingDto {
    fn from(booking: entity::booking::Model) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            room_id: booking.room_id,
            booking_date: booking.booking_date,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            status: booking.status.into(),
            additional_info: booking.additional_info,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CancellationDto {
    pub id: i32,
    pub booking_id: i32,
    pub cancellation_date: NaiveDate,
    pub refund_amount: f64,
}

impl From<entity::cancellation::Model> for CancellationDto {
    fn from(cancellation: entity::cancellation::Model) -> Self {
        Self {
            id: cancellation.id,
            booking_id: cancellation.booking_id,
            cancellation_date: cancellation.cancellation_date,
            refund_amount: cancellation.refund_amount,
        }
    }
}

/// Booking detail view with its related records resolved.
#[derive(Serialize, ToSchema)]
pub struct BookingDetailDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    pub room: Option<RoomDto>,
    pub payment: Option<PaymentDto>,
    pub cancellation: Option<CancellationDto>,
    pub reviews: Vec<ReviewDto>,
}

/// Body for the admin cancellation endpoint.
#[derive(Deserialize, ToSchema)]
pub struct CancelBookingDto {
    pub refund_amount: Option<f64>,
}

/// Outcome of one lifecycle sweep.
#[derive(Serialize, ToSchema)]
pub struct SweepReportDto {
    /// Confirmed bookings whose stay ended and were marked completed.
    pub completed: u64,
    /// Pending bookings past check-in that were expired to cancelled.
    pub expired: u64,
}
