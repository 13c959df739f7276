//! In-memory logger
//!
//! Keeps every event and failure so callers can assert on what the cache reported.

use std::sync::{Mutex, MutexGuard};

use super::{Event, FailureLabel, FailureType, Logger};

/// A failure as it was handed to [`Logger::log_failure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFailure {
    pub label: FailureLabel,
    pub failure_type: FailureType,
    pub id: Option<String>,
    pub context: Option<String>,
}

#[derive(Debug, Default)]
struct Recorded {
    events: Vec<Event>,
    failures: Vec<RecordedFailure>,
}

/// Logger that records instead of emitting.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    inner: Mutex<Recorded>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        // A panic mid-push cannot leave the vectors inconsistent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of all events logged so far.
    pub fn events(&self) -> Vec<Event> {
        self.lock().events.clone()
    }

    /// Snapshot of all failures logged so far.
    pub fn failures(&self) -> Vec<RecordedFailure> {
        self.lock().failures.clone()
    }

    pub fn event_count(&self) -> usize {
        self.lock().events.len()
    }

    pub fn failure_count(&self) -> usize {
        self.lock().failures.len()
    }
}

impl Logger for RecordingLogger {
    fn log_event(&self, event: Event) {
        self.lock().events.push(event);
    }

    fn log_failure(
        &self,
        label: FailureLabel,
        failure_type: FailureType,
        id: Option<&str>,
        context: Option<&str>,
    ) {
        self.lock().failures.push(RecordedFailure {
            label,
            failure_type,
            id: id.map(str::to_string),
            context: context.map(str::to_string),
        });
    }
}
