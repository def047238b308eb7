//! Booking state machine.
//!
//! States: pending -> confirmed -> completed, with cancellation allowed
//! from pending and confirmed. Cancelled and completed are terminal.
//! Creation and cancellation run inside a transaction so the booking row
//! and its ledger entries commit together or not at all.

use chrono::Utc;
use sea_orm::{ActiveEnum, DatabaseConnection, SqlErr, TransactionTrait};

use entity::booking::BookingStatus;

use crate::{
    data::{
        availability::{AvailabilityRepository, BlockOutcome},
        booking::BookingRepository,
        cancellation::CancellationRepository,
        payment::PaymentRepository,
        review::ReviewRepository,
        room::RoomRepository,
    },
    error::{booking::BookingError, AppError},
    model::booking::{BookingDetailDto, CreateBookingDto},
    util::dates::days_in_range,
};

pub struct BookingService;

impl BookingService {
    /// Creates a booking and blocks its dates in one transaction.
    ///
    /// The range check is a fast pre-filter; the per-date unique constraint
    /// is what actually decides a race. Losing any single date rolls the
    /// whole transaction back, so no partial blocks survive.
    pub async fn create(
        db: &DatabaseConnection,
        user_id: i32,
        dto: CreateBookingDto,
    ) -> Result<entity::booking::Model, AppError> {
        if dto.check_out_date <= dto.check_in_date {
            return Err(BookingError::InvalidRange.into());
        }

        RoomRepository::new(db)
            .find_by_id(dto.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", dto.room_id)))?;

        let txn = db.begin().await?;

        let availability = AvailabilityRepository::new(&txn);
        if !availability
            .is_range_available(dto.room_id, dto.check_in_date, dto.check_out_date)
            .await?
        {
            return Err(BookingError::RoomUnavailable.into());
        }

        let booking = BookingRepository::new(&txn)
            .create(
                user_id,
                dto.room_id,
                dto.check_in_date,
                dto.check_out_date,
                dto.additional_info,
            )
            .await?;

        for date in days_in_range(dto.check_in_date, dto.check_out_date) {
            match availability.block_date(dto.room_id, date, None).await? {
                BlockOutcome::Blocked(_) => {}
                // A concurrent booking claimed this date between the range
                // check and here. Dropping the transaction rolls back the
                // booking row and every block made so far.
                BlockOutcome::AlreadyBlocked => {
                    return Err(BookingError::RoomUnavailable.into());
                }
            }
        }

        txn.commit().await?;

        Ok(booking)
    }

    /// Cancels a booking: status transition, cancellation record, and
    /// ledger cleanup in one transaction.
    ///
    /// The unblock is skipped when the room was deleted (room_id is null);
    /// the cancellation itself still goes through.
    pub async fn cancel(
        db: &DatabaseConnection,
        booking_id: i32,
        refund_amount: f64,
    ) -> Result<entity::cancellation::Model, AppError> {
        let booking = BookingRepository::new(db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {booking_id} not found")))?;

        if booking.status.is_terminal() {
            return Err(BookingError::InvalidState {
                status: booking.status.to_value(),
                action: "cancelled".to_string(),
            }
            .into());
        }

        let txn = db.begin().await?;

        let transitioned = BookingRepository::new(&txn)
            .update_status(booking.id, booking.status.clone(), BookingStatus::Cancelled)
            .await?;
        if !transitioned {
            // Concurrent transition won between the read and the swap.
            return Err(BookingError::InvalidState {
                status: booking.status.to_value(),
                action: "cancelled".to_string(),
            }
            .into());
        }

        let cancellation = match CancellationRepository::new(&txn)
            .create(booking.id, Utc::now().date_naive(), refund_amount)
            .await
        {
            Ok(cancellation) => cancellation,
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(BookingError::DuplicateCancellation.into());
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(room_id) = booking.room_id {
            AvailabilityRepository::new(&txn)
                .unblock_range(room_id, booking.check_in_date, booking.check_out_date)
                .await?;
        }

        txn.commit().await?;

        Ok(cancellation)
    }

    /// Confirms a pending booking via compare-and-swap.
    pub async fn confirm(
        db: &DatabaseConnection,
        booking_id: i32,
    ) -> Result<entity::booking::Model, AppError> {
        let bookings = BookingRepository::new(db);

        let booking = bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {booking_id} not found")))?;

        let transitioned = bookings
            .update_status(booking.id, BookingStatus::Pending, BookingStatus::Confirmed)
            .await?;
        if !transitioned {
            return Err(BookingError::InvalidState {
                status: booking.status.to_value(),
                action: "confirmed".to_string(),
            }
            .into());
        }

        bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {booking_id} not found")))
    }

    pub async fn list_for_user(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Vec<entity::booking::Model>, AppError> {
        Ok(BookingRepository::new(db).find_by_user(user_id).await?)
    }

    /// Booking detail with its room, payment, cancellation, and reviews.
    pub async fn get_with_relations(
        db: &DatabaseConnection,
        booking_id: i32,
    ) -> Result<BookingDetailDto, AppError> {
        let booking = BookingRepository::new(db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {booking_id} not found")))?;

        let room = match booking.room_id {
            Some(room_id) => RoomRepository::new(db).find_by_id(room_id).await?,
            None => None,
        };
        let payment = PaymentRepository::new(db)
            .find_by_booking_id(booking.id)
            .await?;
        let cancellation = CancellationRepository::new(db)
            .find_by_booking_id(booking.id)
            .await?;
        let reviews = ReviewRepository::new(db)
            .find_by_booking_id(booking.id)
            .await?;

        Ok(BookingDetailDto {
            booking: booking.into(),
            room: room.map(Into::into),
            payment: payment.map(Into::into),
            cancellation: cancellation.map(Into::into),
            reviews: reviews.into_iter().map(Into::into).collect(),
        })
    }
}
