//! Application setup and initialization
//!
//! Initialization logic extracted from main.rs for better organization and
//! testability.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use crisismap_core::{Config, ReportImageValidator};
use crisismap_db::{Database, DatabaseConfig, ReportRepository};
use crisismap_storage::create_storage;

use crate::state::AppState;

/// Initialize the entire application.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Configuration loaded and validated successfully");

    let storage = create_storage(&config)
        .await
        .context("Failed to initialize storage backend")?;
    tracing::info!(backend = %storage.backend_type(), "Storage backend ready");

    // The pool is not opened here. The first request that needs the database
    // triggers the connection, so a cold process starts even when the
    // database is briefly unreachable.
    let db = Database::new(DatabaseConfig::from_config(&config));
    let reports = ReportRepository::new(db);
    tracing::info!("Database connection deferred until first use");

    let validator = ReportImageValidator::new(
        config.max_file_size_bytes,
        config.allowed_extensions.clone(),
        config.allowed_content_types.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        reports,
        storage,
        validator,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
