//! Application state shared across handlers.

use std::sync::Arc;

use crisismap_core::{Config, ReportImageValidator};
use crisismap_db::ReportRepository;
use crisismap_storage::Storage;

/// Shared state: configuration, the report repository (which owns the lazy
/// database handle), the media uploader, and the image validator.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub reports: ReportRepository,
    pub storage: Arc<dyn Storage>,
    pub validator: ReportImageValidator,
}
