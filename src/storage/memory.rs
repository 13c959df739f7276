//! In-process storage backed by a shared HashMap.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Storage;
use crate::error::StorageError;

/// Thread-safe in-memory [`Storage`]. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set_value(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
