//! Multipart form extraction for report submissions.
//!
//! The submission form carries three text fields (`lat`, `long`, `comment`)
//! and an optional `image` file part. Fields may arrive in any order and
//! unknown fields are ignored.

use axum::extract::Multipart;
use crisismap_core::{models::ReportSubmission, AppError};

/// An image file pulled out of the multipart stream, buffered in memory.
#[derive(Debug)]
pub struct ReportImageUpload {
    pub data: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

/// Parse a coordinate text field. Blank input means the submitter left the
/// field out; anything else must be a valid float.
fn parse_coordinate(name: &str, raw: &str) -> Result<Option<f64>, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| AppError::Validation(format!("Invalid {name} value: {trimmed:?}")))
}

/// Drain the multipart stream into a submission plus an optional image.
pub async fn extract_report_form(
    mut multipart: Multipart,
) -> Result<(ReportSubmission, Option<ReportImageUpload>), AppError> {
    let mut submission = ReportSubmission::default();
    let mut image: Option<ReportImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read multipart field: {e}")))?
    {
        let name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        match name.as_str() {
            "lat" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read lat field: {e}")))?;
                submission.lat = parse_coordinate("lat", &text)?;
            }
            "long" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read long field: {e}")))?;
                submission.long = parse_coordinate("long", &text)?;
            }
            "comment" => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read comment field: {e}"))
                })?;
                let trimmed = text.trim();
                submission.comment = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
            }
            "image" => {
                if image.is_some() {
                    return Err(AppError::Validation(
                        "Multiple image fields in submission".to_string(),
                    ));
                }

                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Upload(format!("Failed to read image data: {e}")))?
                    .to_vec();

                // Browsers send an empty file part when no file was picked.
                if filename.is_empty() && data.is_empty() {
                    continue;
                }

                image = Some(ReportImageUpload {
                    data,
                    filename,
                    content_type,
                });
            }
            _ => {
                tracing::debug!(field = %name, "Ignoring unknown multipart field");
            }
        }
    }

    Ok((submission, image))
}
