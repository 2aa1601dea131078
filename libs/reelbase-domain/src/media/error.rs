//! Errors surfaced by media use cases and repositories
//!
//! The domain taxonomy has two kinds: a Video failed validation, or no Video
//! exists for an id. `StorageFailure` covers I/O failures of persistent
//! adapters so they can report problems without panicking.

use thiserror::Error;

use crate::shared::error::EntityValidationError;

/// No Video is stored under the requested id
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("video not found: {id}")]
pub struct VideoNotFoundError {
    id: String,
}

impl VideoNotFoundError {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The id that was looked up
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Errors that can occur while uploading or fetching a Video
///
/// Both domain kinds propagate unchanged from where they are raised; mapping
/// them to transport statuses is left to the boundary layer.
#[derive(Error, Debug)]
pub enum MediaError {
    /// One or more field invariants were violated (client input or a corrupt stored row)
    #[error(transparent)]
    Validation(#[from] EntityValidationError),

    /// Lookup yielded nothing
    #[error(transparent)]
    NotFound(#[from] VideoNotFoundError),

    /// The storage backend failed
    #[error("Storage operation failed: {0}")]
    StorageFailure(String),
}

impl MediaError {
    /// Create a not found error for the given id
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(VideoNotFoundError::new(id))
    }

    /// Create a storage failure error with a message
    pub fn storage_failure(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }

    /// Whether repeating the same call could succeed
    ///
    /// Domain errors never do; only the storage backend may recover on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageFailure(_))
    }
}

/// Result type alias for media operations
pub type Result<T> = std::result::Result<T, MediaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ValidationIssue;

    #[test]
    fn test_not_found_error() {
        let err = MediaError::not_found("550e8400-e29b-41d4-a716-446655440000");

        assert!(matches!(err, MediaError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "video not found: 550e8400-e29b-41d4-a716-446655440000"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_not_found_keeps_id() {
        let err = VideoNotFoundError::new("abc");
        assert_eq!(err.id(), "abc");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: MediaError = EntityValidationError::new(
            "Video",
            vec![ValidationIssue::new("title", "too short")],
        )
        .into();

        assert_eq!(err.to_string(), "Video validation failed");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_storage_failure_error() {
        let err = MediaError::storage_failure("connection refused");

        assert_eq!(err.to_string(), "Storage operation failed: connection refused");
        assert!(err.is_retryable());
    }
}
