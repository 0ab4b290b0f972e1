//! Report domain model
//!
//! A report is one disaster observation: coordinates, a free-text comment, an
//! optional photo URL, and a server-assigned timestamp. Rows are immutable
//! once persisted; there is no update or delete path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted report. The `id` is assigned by the storage layer on creation.
///
/// `lat`, `long`, and `comment` are accepted as-is from the caller; absent
/// fields stay absent rather than being defaulted. `image_url` is either a
/// public URL at the upload provider or null, never a local path.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Report {
    pub id: Uuid,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub comment: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Fields of a report before persistence assigns an id.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub comment: Option<String>,
    pub image_url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl NewReport {
    /// Build a new report from submitted fields with the timestamp assigned
    /// now. `image_url` is the uploader's URL, or None when no photo was sent.
    pub fn from_submission(submission: ReportSubmission, image_url: Option<String>) -> Self {
        Self {
            lat: submission.lat,
            long: submission.long,
            comment: submission.comment,
            image_url,
            timestamp: Utc::now(),
        }
    }
}

/// Explicit input schema for a report submission. Every field is optional;
/// the boundary parses what it gets and passes absence through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSubmission {
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub comment: Option<String>,
}
