//! Crisismap storage
//!
//! Storage abstraction for report photos: the `Storage` trait plus S3 and
//! local-filesystem backends.
//!
//! # Storage key format
//!
//! Keys are `{folder}/{filename}`, where the folder is the configured upload
//! folder (default `disaster-reports`). Keys must not contain `..` or a
//! leading `/`. Key generation is centralized in the `keys` module so both
//! backends stay consistent.

pub mod factory;
pub(crate) mod keys;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use crisismap_core::StorageBackend;
pub use factory::create_storage;
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
