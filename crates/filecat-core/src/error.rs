//! Error types for catalog lookups.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{DirectoryId, FileId};

/// Errors that can occur while resolving references between records.
///
/// A dangling reference aborts the whole query call; there are no retries
/// and no partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CatalogError {
    /// A file or junction record references a directory id with no record.
    #[error("directory not found for id {id}")]
    DirectoryNotFound { id: DirectoryId },

    /// A junction record references a file id with no record.
    #[error("file not found for id {id}")]
    FileNotFound { id: FileId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::FileNotFound {
            id: FileId::new(12),
        };
        assert_eq!(err.to_string(), "file not found for id 12");

        let err = CatalogError::DirectoryNotFound {
            id: DirectoryId::new(3),
        };
        assert_eq!(err.to_string(), "directory not found for id 3");
    }
}
