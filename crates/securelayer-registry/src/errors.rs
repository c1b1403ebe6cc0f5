//! Registry error types.

use securelayer_storage::StorageError;
use thiserror::Error;

/// Certificate registry and contact intake errors
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Caller input failed a required-field or format check
    #[error("{0}")]
    Validation(String),

    /// Uniqueness violation on registration
    #[error("{0}")]
    Conflict(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
