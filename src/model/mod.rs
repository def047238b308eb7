//! Request and response DTOs for the HTTP API.
//!
//! Controllers deserialize request bodies into the `Create*`/`*Query` types
//! here and serialize entity models into the response DTOs. Keeping the wire
//! shapes separate from the SeaORM entities lets the schema evolve without
//! leaking database concerns into the API.

pub mod api;
pub mod availability;
pub mod booking;
pub mod hotel;
pub mod location;
pub mod payment;
pub mod review;
pub mod room;
pub mod search;
pub mod user;
