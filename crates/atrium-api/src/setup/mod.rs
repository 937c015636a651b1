//! Application setup and initialization
//!
//! Initialization logic lives here rather than in main.rs so it can be
//! shared with the seed binary and integration tests.

pub mod database;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::Result;
use atrium_core::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with an env-filter, defaulting to info level.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize the application: database pool, state, and router.
pub async fn initialize_app(config: &Config) -> Result<axum::Router> {
    tracing::info!(environment = %config.environment, "Configuration loaded");

    let pool = database::setup_database(config).await?;

    let state = Arc::new(AppState::new(pool));

    let router = routes::setup_routes(config, state)?;

    Ok(router)
}
