//! SeaORM entity definitions for the stayboard schema.
//!
//! One module per table. Column types mirror the migrations in the
//! `migration` crate; the `(room_id, date)` uniqueness of the availability
//! ledger is enforced there via a unique index.

pub mod booking;
pub mod cancellation;
pub mod city;
pub mod country;
pub mod hotel;
pub mod hotel_photo;
pub mod payment;
pub mod review;
pub mod room;
pub mod room_availability;
pub mod user;

pub mod prelude;
