//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories are generic over SeaORM's `ConnectionTrait` so
//! the same repository can run against the pooled connection or inside an open transaction.

pub mod availability;
pub mod booking;
pub mod cancellation;
pub mod hotel;
pub mod location;
pub mod payment;
pub mod photo;
pub mod review;
pub mod room;
pub mod user;
