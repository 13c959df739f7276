//! Error types for the cache layer
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Every way a `get_fresh_value` call can be rejected.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key, fetch function or freshness window failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The caller-supplied fetch rejected; forwarded as-is
    #[error(transparent)]
    Fetch(anyhow::Error),

    /// The storage backend failed to read or write
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CacheError {
    /// Returns the original fetch error, if this rejection came from the fetch function.
    pub fn as_fetch_error(&self) -> Option<&anyhow::Error> {
        match self {
            CacheError::Fetch(err) => Some(err),
            _ => None,
        }
    }
}

// == Storage Error Enum ==
/// Failures raised by a [`Storage`](crate::storage::Storage) backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file or device failure
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted store contents could not be decoded or encoded
    #[error("Storage contents are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// A callback-style store never answered a read
    #[error("Storage callback for key '{0}' was dropped without a value")]
    CallbackDropped(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache layer.
pub type Result<T> = std::result::Result<T, CacheError>;
