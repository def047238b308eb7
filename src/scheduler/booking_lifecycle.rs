use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::lifecycle::LifecycleService};

/// Starts the booking lifecycle scheduler.
///
/// Runs the sweep at the top of every hour: confirmed bookings past
/// check-out become completed and pending bookings past check-in are
/// expired. Errors inside the job are logged, never propagated; a failed
/// run is retried on the next tick.
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            match LifecycleService::sweep(&db, Utc::now().date_naive()).await {
                Ok(report) => {
                    tracing::debug!(
                        "Scheduled sweep: {} completed, {} expired",
                        report.completed,
                        report.expired
                    );
                }
                Err(e) => {
                    tracing::error!("Error running booking lifecycle sweep: {}", e);
                }
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Booking lifecycle scheduler started");

    Ok(())
}
