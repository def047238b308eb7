//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::service::{mailer::Mailer, reset_code::ResetCodeService};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ResetCodeService` uses `Arc` for shared state
/// - `Mailer` wraps an `Arc`-backed SMTP transport
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Service for managing password reset codes.
    ///
    /// Holds the in-memory store of emailed 6-digit codes with their
    /// expiration timestamps.
    pub reset_codes: ResetCodeService,

    /// Async SMTP mailer for account and booking notifications.
    pub mailer: Mailer,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized. The resulting state is then provided to the Axum router
    /// for use in request handlers.
    pub fn new(db: DatabaseConnection, reset_codes: ResetCodeService, mailer: Mailer) -> Self {
        Self {
            db,
            reset_codes,
            mailer,
        }
    }
}
