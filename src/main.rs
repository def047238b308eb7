mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use tower_http::cors::CorsLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{
    config::Config,
    error::AppError,
    scheduler::booking_lifecycle,
    service::{mailer::Mailer, reset_code::ResetCodeService},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stayboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;

    let reset_codes = ResetCodeService::new();
    let mailer = Mailer::from_config(&config)?;

    tracing::info!("Starting server");

    // Hourly booking lifecycle sweep runs independently of any request
    let sweep_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = booking_lifecycle::start_scheduler(sweep_db).await {
            tracing::error!("Booking lifecycle scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, reset_codes, mailer))
        .layer(session_layer)
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
