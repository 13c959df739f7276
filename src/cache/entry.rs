//! Time-Stamped Value Module
//!
//! Defines the unit the cache manages and its persisted record form.

use chrono::Utc;
use serde::{Deserialize, Serialize};

// == Time-Stamped Value ==
/// A fetched payload together with the wall-clock time it was produced.
///
/// Persisted as `{"lastUpdated": <epoch ms>, "data": "<payload>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeStampedValue {
    /// The serialized producer result; never interpreted by the cache
    #[serde(rename = "data")]
    pub payload: String,
    /// Epoch milliseconds at which the payload was written
    #[serde(rename = "lastUpdated")]
    pub last_updated: i64,
}

impl TimeStampedValue {
    // == Constructor ==
    /// Wraps a freshly fetched payload, stamping it with the current time.
    pub fn new(payload: String) -> Self {
        Self {
            payload,
            last_updated: now_ms(),
        }
    }

    // == Record Encoding ==
    /// Serializes the value into the string blob written to storage.
    pub fn to_record(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a stored record.
    ///
    /// Returns `None` for anything that is not a well-formed record, so that
    /// garbled data degrades to a cache miss instead of an error.
    pub fn from_record(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    // == Age ==
    /// Milliseconds elapsed since `last_updated`.
    ///
    /// A timestamp in the future (clock skew) counts as age zero.
    pub fn age_ms(&self, now: i64) -> i64 {
        now.saturating_sub(self.last_updated).max(0)
    }

    // == Is Fresh ==
    /// Checks whether the value may be served without refetching.
    ///
    /// Boundary condition: strictly `age < window`, so a zero window is never fresh.
    pub fn is_fresh(&self, now: i64, freshness_window_ms: i64) -> bool {
        self.age_ms(now) < freshness_window_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
