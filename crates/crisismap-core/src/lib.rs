//! Core types shared across the crisismap crates: configuration, the error
//! taxonomy, the report model, and image validation rules.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validation;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
pub use validation::{ReportImageValidator, ValidationError};
