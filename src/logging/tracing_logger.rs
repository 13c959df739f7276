//! Tracing-backed logger

use tracing::{error, info, warn};

use super::{Event, FailureLabel, FailureType, Logger};

/// Forwards events and failures to the installed `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log_event(&self, event: Event) {
        info!(
            label = ?event.label,
            key = %event.key,
            duration_ms = event.duration_ms,
            "cache event"
        );
    }

    fn log_failure(
        &self,
        label: FailureLabel,
        failure_type: FailureType,
        id: Option<&str>,
        context: Option<&str>,
    ) {
        match failure_type {
            FailureType::Unexpected => error!(
                label = %label,
                failure_type = %failure_type,
                id = id.unwrap_or_default(),
                context = context.unwrap_or_default(),
                "cache failure"
            ),
            FailureType::Expected => warn!(
                label = %label,
                failure_type = %failure_type,
                id = id.unwrap_or_default(),
                context = context.unwrap_or_default(),
                "cache failure"
            ),
        }
    }
}
