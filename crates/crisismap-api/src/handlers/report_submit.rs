//! Report submission handler.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::Multipart, extract::State, http::StatusCode, Json};
use crisismap_core::models::NewReport;
use uuid::Uuid;

use crate::error::HttpAppError;
use crate::handlers::MessageResponse;
use crate::multipart::extract_report_form;
use crate::state::AppState;

/// POST /api/reports - accept a multipart submission with optional image.
///
/// The photo (when present) is validated against the format allow-list and
/// uploaded before the row is written. If the row write then fails, the
/// uploaded object is retained and its key is logged so it can be reconciled
/// later; nothing attempts a delete on this path.
pub async fn submit_report(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MessageResponse>), HttpAppError> {
    let start = Instant::now();

    let (submission, image) = extract_report_form(multipart).await?;

    let mut stored_key: Option<String> = None;
    let mut image_url: Option<String> = None;

    if let Some(upload) = image {
        let extension = state.validator.validate_all(
            &upload.filename,
            &upload.content_type,
            upload.data.len(),
        )?;

        // Store under a fresh id, not the client's filename.
        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        let (key, url) = state
            .storage
            .upload(
                &state.config.upload_folder,
                &filename,
                &upload.content_type,
                upload.data,
            )
            .await?;

        stored_key = Some(key);
        image_url = Some(url);
    }

    let report = NewReport::from_submission(submission, image_url);

    let created = match state.reports.create(report).await {
        Ok(created) => created,
        Err(err) => {
            if let Some(key) = stored_key {
                tracing::warn!(
                    storage_key = %key,
                    "Report persistence failed after upload; storage object retained for reconciliation"
                );
            }
            return Err(err.into());
        }
    };

    tracing::info!(
        report_id = %created.id,
        has_image = created.image_url.is_some(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Report submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Report submitted successfully".to_string(),
        }),
    ))
}
