//! Fresh Cache - A persisted, time-bounded cache-aside layer
//!
//! Serves a stored value while it is younger than a caller-chosen freshness
//! window, and otherwise refetches it from its source, persists it with a new
//! timestamp and reports the fetch.

pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod storage;

pub use cache::{get_fresh_value, BoundCache, Fetch, TimeStampedValue};
pub use config::Config;
pub use error::{CacheError, Result, StorageError};
pub use logging::{Logger, RecordingLogger, TracingLogger};
pub use storage::{FileStorage, MemoryStorage, Storage};
