//! Payment recording.

use chrono::Utc;
use sea_orm::{DatabaseConnection, SqlErr};

use entity::booking::BookingStatus;

use crate::{
    data::{booking::BookingRepository, payment::PaymentRepository},
    error::{booking::BookingError, AppError},
    model::payment::CreatePaymentDto,
};

pub struct PaymentService;

impl PaymentService {
    /// Records a payment for a booking and confirms it if still pending.
    ///
    /// Confirmation is best-effort: a booking that already left pending
    /// keeps its status and the payment stands regardless. The unique
    /// constraint on booking_id catches a concurrent duplicate that slips
    /// past the pre-check.
    pub async fn create(
        db: &DatabaseConnection,
        dto: CreatePaymentDto,
    ) -> Result<entity::payment::Model, AppError> {
        let booking = BookingRepository::new(db)
            .find_by_id(dto.booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", dto.booking_id)))?;

        if dto.amount <= 0.0 {
            return Err(AppError::BadRequest(
                "Payment amount must be positive".to_string(),
            ));
        }

        let payments = PaymentRepository::new(db);

        if payments.find_by_booking_id(booking.id).await?.is_some() {
            return Err(BookingError::DuplicatePayment.into());
        }

        let payment = match payments
            .create(
                booking.id,
                Utc::now().date_naive(),
                dto.payment_method,
                dto.amount,
            )
            .await
        {
            Ok(payment) => payment,
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(BookingError::DuplicatePayment.into());
            }
            Err(e) => return Err(e.into()),
        };

        BookingRepository::new(db)
            .update_status(booking.id, BookingStatus::Pending, BookingStatus::Confirmed)
            .await?;

        Ok(payment)
    }

    pub async fn find_by_booking_id(
        db: &DatabaseConnection,
        booking_id: i32,
    ) -> Result<entity::payment::Model, AppError> {
        PaymentRepository::new(db)
            .find_by_booking_id(booking_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No payment found for booking {booking_id}"))
            })
    }
}
