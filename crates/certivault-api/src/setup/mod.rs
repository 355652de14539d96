//! Application setup and initialization

pub mod database;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use certivault_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.environment())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let (certificates, issuers) = database::setup_stores(&config).await?;
    let state = Arc::new(AppState::new(config.clone(), certificates, issuers));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
