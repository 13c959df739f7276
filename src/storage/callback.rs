//! Callback-style storage adapter
//!
//! Some stores answer reads through a callback and treat writes as
//! fire-and-forget. `CallbackStorage` turns such a store into a [`Storage`]
//! so the cache can await it like any other backend.

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::Storage;
use crate::error::StorageError;

/// Receives the raw stored value, or `None` if the key is unset.
pub type ValueCallback = Box<dyn FnOnce(Option<String>) + Send>;

/// A store with a callback read and a fire-and-forget write.
pub trait CallbackStore: Send + Sync {
    /// Looks up `key` and eventually invokes `callback` with the result.
    fn get_value(&self, key: &str, callback: ValueCallback);

    /// Stores `value` under `key`. Completion is not reported.
    fn set_value(&self, key: &str, value: String);
}

/// Future-based view over a [`CallbackStore`].
#[derive(Debug, Clone, Default)]
pub struct CallbackStorage<S> {
    inner: S,
}

impl<S: CallbackStore> CallbackStorage<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: CallbackStore> Storage for CallbackStorage<S> {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let (tx, rx) = oneshot::channel();
        self.inner.get_value(
            key,
            Box::new(move |value| {
                // Receiver gone means the caller stopped waiting.
                let _ = tx.send(value);
            }),
        );
        rx.await
            .map_err(|_| StorageError::CallbackDropped(key.to_string()))
    }

    async fn set_value(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.inner.set_value(key, value);
        Ok(())
    }
}
