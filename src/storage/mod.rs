//! Storage Module
//!
//! The persisted key-value store the cache reads records from and writes
//! refreshed records to. Values are opaque strings.

mod callback;
mod file;
mod memory;

use async_trait::async_trait;

use crate::error::StorageError;

pub use callback::{CallbackStorage, CallbackStore, ValueCallback};
pub use file::FileStorage;
pub use memory::MemoryStorage;

// == Storage Trait ==
/// Asynchronous string key-value store.
///
/// Implementations own their own synchronization and timeouts; the cache
/// never holds a lock across a read and the following write.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the raw value for `key`, or `None` if it was never set.
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set_value(&self, key: &str, value: String) -> Result<(), StorageError>;
}
