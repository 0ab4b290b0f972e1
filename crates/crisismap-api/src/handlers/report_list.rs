//! Report listing handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use crisismap_core::models::Report;

use crate::error::HttpAppError;
use crate::state::AppState;

/// GET /api/reports - return every report. No pagination and no ordering
/// guarantee; consumers sort client-side.
pub async fn list_reports(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Report>>, HttpAppError> {
    let reports = state.reports.list_all().await?;

    tracing::debug!(count = reports.len(), "Listed reports");

    Ok(Json(reports))
}
