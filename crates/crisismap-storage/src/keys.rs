//! Shared key generation for storage backends.
//!
//! Key format: `{folder}/{filename}`. Both backends must use this format for
//! consistency.

use crate::traits::{StorageError, StorageResult};

/// Generate a storage key for the given folder and filename.
///
/// Rejects components that would let a key escape the folder layout.
pub fn generate_storage_key(folder: &str, filename: &str) -> StorageResult<String> {
    for part in [folder, filename] {
        if part.is_empty() || part.contains("..") || part.starts_with('/') {
            return Err(StorageError::InvalidKey(format!(
                "Invalid storage key component: {}",
                part
            )));
        }
    }

    Ok(format!("{}/{}", folder.trim_end_matches('/'), filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_storage_key() {
        assert_eq!(
            generate_storage_key("disaster-reports", "a.jpg").unwrap(),
            "disaster-reports/a.jpg"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(
            generate_storage_key("disaster-reports/", "a.jpg").unwrap(),
            "disaster-reports/a.jpg"
        );
    }

    #[test]
    fn test_rejects_traversal() {
        assert!(generate_storage_key("disaster-reports", "../a.jpg").is_err());
        assert!(generate_storage_key("..", "a.jpg").is_err());
        assert!(generate_storage_key("/etc", "passwd").is_err());
        assert!(generate_storage_key("", "a.jpg").is_err());
    }
}
