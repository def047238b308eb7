//! Business logic layer.
//!
//! Services orchestrate the repositories: validation, transaction scoping,
//! and mapping storage-level conflicts onto domain errors happen here.
//! Controllers stay thin and hand DTOs straight through.

pub mod availability;
pub mod booking;
pub mod hotel;
pub mod lifecycle;
pub mod location;
pub mod mailer;
pub mod payment;
pub mod reset_code;
pub mod review;
pub mod room;
pub mod search;
pub mod user;

#[cfg(test)]
mod test;
