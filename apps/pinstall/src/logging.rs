//! Structured logging integration for events
//!
//! Converts drained [`EventMessage`]s into tracing records with structured
//! fields, at the level carried in the event metadata.

use pinstall_events::{AppEvent, ConfigEvent, EventMessage, GeneralEvent};
use tracing::{debug, info, warn};

/// Log an event using the tracing infrastructure with structured fields
pub fn log_event_with_tracing(message: &EventMessage) {
    let meta = &message.meta;
    match &message.event {
        AppEvent::Config(config_event) => match config_event {
            ConfigEvent::ValidationStarted { operation } => {
                debug!(
                    source = meta.source.as_str(),
                    event_id = %meta.event_id,
                    correlation = ?meta.correlation_id,
                    operation = %operation,
                    "Configuration validation started"
                );
            }
            ConfigEvent::Validated {
                operation,
                workers_count,
                profile,
                version,
                cancel_timeout,
                quit_timeout,
            } => {
                info!(
                    source = meta.source.as_str(),
                    event_id = %meta.event_id,
                    correlation = ?meta.correlation_id,
                    operation = %operation,
                    workers_count = workers_count,
                    profile = %profile,
                    version = %version,
                    cancel_timeout = ?cancel_timeout,
                    quit_timeout = ?quit_timeout,
                    "Configuration validated"
                );
            }
            // The returned error is printed by main; keep failures out of the default filter
            ConfigEvent::ValidationFailed { operation, failure } => {
                debug!(
                    source = meta.source.as_str(),
                    event_id = %meta.event_id,
                    correlation = ?meta.correlation_id,
                    operation = %operation,
                    code = ?failure.code,
                    message = %failure.message,
                    hint = ?failure.hint,
                    "Configuration validation failed"
                );
            }
            ConfigEvent::UnrecognizedProfile { profile } => {
                warn!(
                    source = meta.source.as_str(),
                    event_id = %meta.event_id,
                    correlation = ?meta.correlation_id,
                    profile = %profile,
                    "Unrecognized profile"
                );
            }
        },

        AppEvent::General(general_event) => match general_event {
            GeneralEvent::OperationStarted { operation } => {
                info!(
                    source = meta.source.as_str(),
                    correlation = ?meta.correlation_id,
                    operation = %operation,
                    "Operation started"
                );
            }
            GeneralEvent::OperationCompleted { operation, success } => {
                info!(
                    source = meta.source.as_str(),
                    correlation = ?meta.correlation_id,
                    operation = %operation,
                    success = success,
                    "Operation completed"
                );
            }
            GeneralEvent::OperationFailed { operation, error } => {
                debug!(
                    source = meta.source.as_str(),
                    correlation = ?meta.correlation_id,
                    operation = %operation,
                    error = %error,
                    "Operation failed"
                );
            }
        },
    }
}
