//! Cache Module
//!
//! Persisted, time-bounded cache-aside over a caller-supplied fetch.

mod bound;
pub mod engine;
mod entry;
mod fetch;


// Re-export public types
pub use bound::BoundCache;
pub use engine::get_fresh_value;
pub use entry::{now_ms, TimeStampedValue};
pub use fetch::{with_timeout, Fetch, FetchTimeout, TimeoutFetch};

// == Public Constants ==
/// Freshness window applied when a call supplies none (12 hours)
pub const DEFAULT_FRESHNESS_WINDOW_MS: i64 = 12 * 60 * 60 * 1000;

/// Timeout for a single fetch at the fetch boundary
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
