//! Bundle assembly error types.

use thiserror::Error;

/// Result type alias for bundle operations.
pub type Result<T> = std::result::Result<T, BundleError>;

/// Errors that abort an export.
///
/// Asset decode failures are deliberately absent: a corrupt inline image is
/// skipped (the page keeps the original reference) and never fails the
/// export. Archive-level failures are fatal and produce no partial output.
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("Failed to serialize site snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Failed to write archive entry {path}: {source}")]
    Entry {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Failed to finalize archive: {0}")]
    Finalize(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BundleError::Entry {
            path: "index.html".to_string(),
            source: zip::result::ZipError::FileNotFound,
        };
        assert!(err.to_string().contains("index.html"));
    }
}
