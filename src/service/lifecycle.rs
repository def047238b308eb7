//! Lifecycle sweep over stale bookings.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use entity::booking::BookingStatus;

use crate::{data::booking::BookingRepository, error::AppError, model::booking::SweepReportDto};

pub struct LifecycleService;

impl LifecycleService {
    /// Sweeps stale bookings relative to `today`.
    ///
    /// Confirmed bookings whose check-out passed become completed; pending
    /// bookings whose check-in passed without confirmation become
    /// cancelled. Every transition is an individual compare-and-swap, so a
    /// booking cancelled mid-sweep is simply skipped. Per-booking failures
    /// are logged and skipped; the sweep itself keeps going.
    ///
    /// Auto-expiry flips the status only: no cancellation record is
    /// written and the blocked dates stay in the ledger.
    pub async fn sweep(
        db: &DatabaseConnection,
        today: NaiveDate,
    ) -> Result<SweepReportDto, AppError> {
        let bookings = BookingRepository::new(db);

        let mut completed = 0;
        for booking in bookings.find_due_completion(today).await? {
            match bookings
                .update_status(booking.id, BookingStatus::Confirmed, BookingStatus::Completed)
                .await
            {
                Ok(true) => completed += 1,
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!("Skipping booking {} during sweep: {}", booking.id, e);
                }
            }
        }

        let mut expired = 0;
        for booking in bookings.find_due_expiry(today).await? {
            match bookings
                .update_status(booking.id, BookingStatus::Pending, BookingStatus::Cancelled)
                .await
            {
                Ok(true) => expired += 1,
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!("Skipping booking {} during sweep: {}", booking.id, e);
                }
            }
        }

        if completed > 0 || expired > 0 {
            tracing::info!(
                "Lifecycle sweep completed {} and expired {} bookings",
                completed,
                expired
            );
        }

        Ok(SweepReportDto { completed, expired })
    }
}
