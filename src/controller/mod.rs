//! HTTP request handlers.
//!
//! Controllers extract and validate request data, enforce authentication
//! through `AuthGuard`, delegate to the service layer, and shape responses
//! as DTOs.

pub mod auth;
pub mod availability;
pub mod booking;
pub mod hotel;
pub mod location;
pub mod payment;
pub mod review;
pub mod room;
