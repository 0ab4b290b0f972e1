//! HTTP error response conversion
//!
//! Every internal failure kind collapses to one generic 500 response
//! (`{"message": "Server error"}`), matching the public API contract. The
//! kinds stay distinct internally: each error is logged at its own level with
//! its own code before the response is flattened.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crisismap_core::{AppError, ErrorMetadata, LogLevel, ValidationError};
use crisismap_storage::StorageError;
use serde::Serialize;

/// Generic error body returned for every failure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from crisismap-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        HttpAppError(AppError::Upload(err.to_string()))
    }
}

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        // Image format rejection is part of the uploader contract, not a form
        // validation gap.
        HttpAppError(AppError::Upload(err.to_string()))
    }
}

fn log_error(error: &AppError) {
    let error_code = error.error_code();
    let kind = error.error_type();
    let details = error.detailed_message();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %details, code = error_code, kind, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %details, code = error_code, kind, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %details, code = error_code, kind, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        log_error(&self.0);

        let body = Json(ErrorResponse {
            message: "Server error".to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage_error_maps_to_upload() {
        let storage_err = StorageError::UploadFailed("connection reset".to_string());
        let HttpAppError(app_err) = storage_err.into();
        match app_err {
            AppError::Upload(msg) => assert!(msg.contains("connection reset")),
            other => panic!("Expected Upload variant, got {:?}", other),
        }
    }

    #[test]
    fn test_from_validation_error_maps_to_upload() {
        let validation_err = ValidationError::InvalidExtension {
            extension: "gif".to_string(),
            allowed: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
        };
        let HttpAppError(app_err) = validation_err.into();
        match app_err {
            AppError::Upload(msg) => assert!(msg.contains("gif")),
            other => panic!("Expected Upload variant, got {:?}", other),
        }
    }

    #[test]
    fn test_every_kind_collapses_to_500() {
        let errors = vec![
            AppError::Validation("bad lat".to_string()),
            AppError::Upload("rejected".to_string()),
            AppError::Connection("refused".to_string()),
            AppError::Database(sqlx::Error::PoolClosed),
            AppError::Internal("boom".to_string()),
        ];
        for err in errors {
            let response = HttpAppError(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
