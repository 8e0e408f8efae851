//! Store error types.

use thiserror::Error;
use uuid::Uuid;

use examtrack_core::error::ValidationError;

/// Errors from record store operations.
///
/// Malformed data is always surfaced as an error, never silently
/// truncated into a partial collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access data file: {0}")]
    Io(#[from] std::io::Error),

    /// The data file or an import payload held invalid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An import payload parsed but was not a JSON array of records.
    #[error("import payload must be a JSON array of exam records")]
    NotAnArray,

    #[error("no exam record with id {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
