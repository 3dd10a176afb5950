use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::FailureContext;

/// Configuration lifecycle events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConfigEvent {
    /// Validation started for the given operation
    ValidationStarted { operation: String },

    /// All checks passed
    Validated {
        operation: String,
        workers_count: usize,
        profile: String,
        version: String,
        cancel_timeout: Duration,
        quit_timeout: Duration,
    },

    /// The first failing check aborted validation
    ValidationFailed {
        operation: String,
        failure: FailureContext,
    },

    /// The profile is not one of the well-known names; it is passed through as-is
    UnrecognizedProfile { profile: String },
}
