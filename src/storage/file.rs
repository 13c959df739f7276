//! File-backed storage
//!
//! Persists all keys as a single JSON object so cached records survive
//! across process runs.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use super::Storage;
use crate::error::StorageError;

/// [`Storage`] persisted to a JSON file.
///
/// Writes go to a sibling temp file that is then renamed over the target,
/// so a crash never leaves a half-written store behind. Access from this
/// process is serialized; other processes writing the same file race with
/// last-write-wins.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    io_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_vec_pretty(values)?).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.io_lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set_value(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.io_lock.lock().await;
        let mut values = self.load().await?;
        values.insert(key.to_string(), value);
        self.save(&values).await?;
        debug!(path = %self.path.display(), key, "persisted record");
        Ok(())
    }
}
