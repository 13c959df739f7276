//! Cache Engine Module
//!
//! Freshness decision and orchestration: read the stored record, serve it if
//! it is young enough, otherwise fetch, persist and report.

use std::time::Instant;

use tracing::{debug, warn};

use crate::cache::{now_ms, Fetch, TimeStampedValue, DEFAULT_FRESHNESS_WINDOW_MS};
use crate::error::{CacheError, Result, StorageError};
use crate::logging::{Event, FailureLabel, FailureType, Logger};
use crate::storage::Storage;

// == Get Fresh Value ==
/// Returns the value for `key`, refetching it when the stored copy is missing,
/// unreadable or at least `freshness_window_ms` old.
///
/// # Arguments
/// * `storage` - Where records are read from and written to
/// * `logger` - Receives one failure on invalid input, or one event on refresh
/// * `key` - Cache slot; must be present and non-empty
/// * `fetch` - Producer invoked on miss; must be present
/// * `freshness_window_ms` - Maximum usable age; `None` means
///   [`DEFAULT_FRESHNESS_WINDOW_MS`], negative is rejected, `0` always refetches
///
/// # Errors
/// - `InvalidArgument` before any I/O when an argument is rejected
/// - `Fetch` carrying the fetch function's own error
/// - `Storage` when the backend fails
pub async fn get_fresh_value(
    storage: &dyn Storage,
    logger: &dyn Logger,
    key: Option<&str>,
    fetch: Option<&dyn Fetch>,
    freshness_window_ms: Option<i64>,
) -> Result<TimeStampedValue> {
    let (key, fetch, window) = match validate(key, fetch, freshness_window_ms) {
        Ok(args) => args,
        Err(reason) => {
            logger.log_failure(
                FailureLabel::InvalidArgument,
                FailureType::Unexpected,
                None,
                Some(&reason),
            );
            return Err(CacheError::InvalidArgument(reason));
        }
    };

    if let Some(raw) = storage.get_value(key).await? {
        match TimeStampedValue::from_record(&raw) {
            Some(stored) if stored.is_fresh(now_ms(), window) => {
                debug!(key, last_updated = stored.last_updated, "cache hit");
                return Ok(stored);
            }
            Some(stored) => {
                debug!(key, last_updated = stored.last_updated, window, "stale record");
            }
            None => {
                warn!(key, "unparsable record, treating as miss");
            }
        }
    } else {
        debug!(key, "cache miss");
    }

    let started = Instant::now();
    let payload = fetch.fetch(key).await.map_err(CacheError::Fetch)?;
    let fresh = TimeStampedValue::new(payload);

    let record = fresh.to_record().map_err(StorageError::from)?;
    storage.set_value(key, record).await?;

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    logger.log_event(Event::fetch_non_local_data(key, duration_ms));
    debug!(key, duration_ms, "refreshed");

    Ok(fresh)
}

// == Validation ==
/// Checks all arguments up front, returning the reason for the first rejection.
fn validate<'a>(
    key: Option<&'a str>,
    fetch: Option<&'a dyn Fetch>,
    freshness_window_ms: Option<i64>,
) -> std::result::Result<(&'a str, &'a dyn Fetch, i64), String> {
    let key = match key {
        Some(key) if !key.is_empty() => key,
        Some(_) => return Err("key must not be empty".to_string()),
        None => return Err("key is required".to_string()),
    };

    let fetch = fetch.ok_or_else(|| "fetch function is required".to_string())?;

    let window = freshness_window_ms.unwrap_or(DEFAULT_FRESHNESS_WINDOW_MS);
    if window < 0 {
        return Err(format!(
            "freshness window must not be negative, got {}",
            window
        ));
    }

    Ok((key, fetch, window))
}
