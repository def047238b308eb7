//! Background cron jobs.

pub mod booking_lifecycle;
