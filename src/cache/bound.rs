//! Bound Cache Module
//!
//! The engine with its storage and logger fixed at construction.

use std::sync::Arc;

use crate::cache::{engine, Fetch, TimeStampedValue};
use crate::error::Result;
use crate::logging::Logger;
use crate::storage::Storage;

/// Cache-aside handle bound to one storage backend and one logger.
///
/// Holds no state of its own; clones share the same collaborators.
#[derive(Clone)]
pub struct BoundCache {
    storage: Arc<dyn Storage>,
    logger: Arc<dyn Logger>,
}

impl BoundCache {
    pub fn new(storage: Arc<dyn Storage>, logger: Arc<dyn Logger>) -> Self {
        Self { storage, logger }
    }

    /// Same contract as [`engine::get_fresh_value`], using the bound collaborators.
    pub async fn get_fresh_value(
        &self,
        key: Option<&str>,
        fetch: Option<&dyn Fetch>,
        freshness_window_ms: Option<i64>,
    ) -> Result<TimeStampedValue> {
        engine::get_fresh_value(
            self.storage.as_ref(),
            self.logger.as_ref(),
            key,
            fetch,
            freshness_window_ms,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use crate::logging::RecordingLogger;
    use crate::storage::MemoryStorage;

    fn bound() -> (BoundCache, MemoryStorage, Arc<RecordingLogger>) {
        let storage = MemoryStorage::new();
        let logger = Arc::new(RecordingLogger::new());
        let cache = BoundCache::new(Arc::new(storage.clone()), logger.clone());
        (cache, storage, logger)
    }

    #[tokio::test]
    async fn test_bound_rejects_empty_key() {
        let (cache, _storage, logger) = bound();
        let fetch = |_key: String| async { Ok::<_, anyhow::Error>("v".to_string()) };

        let result = cache.get_fresh_value(Some(""), Some(&fetch), None).await;

        assert!(matches!(result, Err(CacheError::InvalidArgument(_))));
        assert_eq!(logger.failure_count(), 1);
    }

    #[tokio::test]
    async fn test_bound_writes_to_bound_storage() {
        let (cache, storage, logger) = bound();
        let fetch = |_key: String| async { Ok::<_, anyhow::Error>("v".to_string()) };

        let value = cache.get_fresh_value(Some("k"), Some(&fetch), Some(0)).await.unwrap();

        let raw = storage.get_value("k").await.unwrap().unwrap();
        assert_eq!(TimeStampedValue::from_record(&raw).unwrap(), value);
        assert_eq!(logger.event_count(), 1);
    }

    #[tokio::test]
    async fn test_bound_clones_share_collaborators() {
        let (cache, _storage, logger) = bound();
        let clone = cache.clone();
        let fetch = |_key: String| async { Ok::<_, anyhow::Error>("v".to_string()) };

        cache.get_fresh_value(Some("k"), Some(&fetch), Some(60_000)).await.unwrap();
        let again = clone.get_fresh_value(Some("k"), Some(&fetch), Some(60_000)).await.unwrap();

        assert_eq!(again.payload, "v");
        assert_eq!(logger.event_count(), 1, "second call is a hit");
    }
}
