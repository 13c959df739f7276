//! Configuration Module
//!
//! Handles loading the cache defaults from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_FRESHNESS_WINDOW_MS};

/// Default location of the persisted record file
pub const DEFAULT_STORE_PATH: &str = ".fresh_cache.json";

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file backing the cache
    pub store_path: PathBuf,
    /// Freshness window in milliseconds used when a call supplies none
    pub freshness_window_ms: i64,
    /// Upper bound in seconds on a single fetch
    pub fetch_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `FRESH_CACHE_STORE_PATH` - Record file (default: .fresh_cache.json)
    /// - `FRESH_CACHE_WINDOW_MS` - Freshness window in ms (default: 12 hours)
    /// - `FRESH_CACHE_FETCH_TIMEOUT_SECS` - Fetch timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            store_path: env::var("FRESH_CACHE_STORE_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            freshness_window_ms: env::var("FRESH_CACHE_WINDOW_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.freshness_window_ms),
            fetch_timeout_secs: env::var("FRESH_CACHE_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fetch_timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            freshness_window_ms: DEFAULT_FRESHNESS_WINDOW_MS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}
