//! Logging Module
//!
//! The telemetry sink the cache reports to: one event per refresh fetch,
//! one failure per rejected call.
//!
//! # Sinks
//! - `TracingLogger`: forwards to `tracing`
//! - `RecordingLogger`: keeps everything in memory for inspection

mod recorder;
mod tracing_logger;

use std::fmt;

pub use recorder::{RecordedFailure, RecordingLogger};
pub use tracing_logger::TracingLogger;

// == Failure Classification ==
/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureLabel {
    /// A caller passed an argument the cache cannot work with
    InvalidArgument,
}

/// Whether a failure is a caller bug or an anticipated runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureType {
    Unexpected,
    Expected,
}

impl fmt::Display for FailureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureLabel::InvalidArgument => write!(f, "InvalidArgument"),
        }
    }
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Unexpected => write!(f, "Unexpected"),
            FailureType::Expected => write!(f, "Expected"),
        }
    }
}

// == Events ==
/// Notable actions worth a telemetry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLabel {
    /// The fetch function ran because the stored value was missing or stale
    FetchNonLocalData,
}

/// A telemetry event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub label: EventLabel,
    /// Cache key the action concerned
    pub key: String,
    /// Wall-clock duration of the action in milliseconds
    pub duration_ms: u64,
}

impl Event {
    /// Event for a completed refresh fetch of `key`.
    pub fn fetch_non_local_data(key: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            label: EventLabel::FetchNonLocalData,
            key: key.into(),
            duration_ms,
        }
    }
}

// == Logger Trait ==
/// Structured sink for events and failures.
///
/// Injected into the cache rather than reached through a global.
pub trait Logger: Send + Sync {
    /// Records that a notable action occurred.
    fn log_event(&self, event: Event);

    /// Records a failure, optionally tagged with an id and free-form context.
    fn log_failure(
        &self,
        label: FailureLabel,
        failure_type: FailureType,
        id: Option<&str>,
        context: Option<&str>,
    );
}
