#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Event system for pinstall
//!
//! Library crates never print or hold a global logger. Components that need
//! to report progress receive an [`EventSender`] from their caller and emit
//! [`AppEvent`]s through the [`EventEmitter`] trait; the caller owns the
//! receiving end and decides how events are rendered or logged.

pub mod meta;
pub use meta::{EventLevel, EventMeta, EventSource};

pub mod events;
pub use events::{AppEvent, ConfigEvent, FailureContext, GeneralEvent};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// An event together with its emission metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub meta: EventMeta,
    pub event: AppEvent,
}

impl EventMessage {
    #[must_use]
    pub fn new(meta: EventMeta, event: AppEvent) -> Self {
        Self { meta, event }
    }
}

/// Type alias for event sender
pub type EventSender = UnboundedSender<EventMessage>;

/// Type alias for event receiver
pub type EventReceiver = UnboundedReceiver<EventMessage>;

/// Create a new event channel
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

/// The unified trait for emitting events throughout pinstall
///
/// This trait provides a single, consistent API for emitting events regardless of
/// whether you have a raw `EventSender` or a struct that contains one.
pub trait EventEmitter {
    /// Get the event sender for this emitter
    fn event_sender(&self) -> Option<&EventSender>;

    /// Hook for emitters that carry extra context (correlation ids, sources)
    fn enrich_event_meta(&self, _event: &AppEvent, _meta: &mut EventMeta) {}

    /// Emit an event with explicit metadata
    fn emit_with_meta(&self, meta: EventMeta, event: AppEvent) {
        if let Some(sender) = self.event_sender() {
            // Ignore send errors - if receiver is dropped, we just continue
            let _ = sender.send(EventMessage::new(meta, event));
        }
    }

    /// Emit an event through this emitter
    fn emit(&self, event: AppEvent) {
        let mut meta = EventMeta::new(event.log_level(), event.event_source());
        self.enrich_event_meta(&event, &mut meta);
        self.emit_with_meta(meta, event);
    }

    /// Emit an operation started event
    fn emit_operation_started(&self, operation: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::OperationStarted {
            operation: operation.into(),
        }));
    }

    /// Emit an operation completed event
    fn emit_operation_completed(&self, operation: impl Into<String>, success: bool) {
        self.emit(AppEvent::General(GeneralEvent::OperationCompleted {
            operation: operation.into(),
            success,
        }));
    }

    /// Emit an operation failed event
    fn emit_operation_failed(&self, operation: impl Into<String>, error: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::OperationFailed {
            operation: operation.into(),
            error: error.into(),
        }));
    }
}

/// Implementation of `EventEmitter` for the raw `EventSender`
/// This allows `EventSender` to be used directly where `EventEmitter` is expected
impl EventEmitter for EventSender {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl EventEmitter for Silent {
        fn event_sender(&self) -> Option<&EventSender> {
            None
        }
    }

    #[tokio::test]
    async fn sender_emits_with_derived_meta() {
        let (tx, mut rx) = channel();
        tx.emit(AppEvent::Config(ConfigEvent::UnrecognizedProfile {
            profile: "staging".into(),
        }));

        let message = rx.recv().await.expect("event");
        assert_eq!(message.meta.level, EventLevel::Warn);
        assert_eq!(message.meta.source, EventSource::CONFIG);
        assert!(message.meta.correlation_id.is_none());
    }

    #[test]
    fn emitting_without_sender_is_noop() {
        Silent.emit_operation_failed("install", "nobody is listening");
    }

    #[test]
    fn dropped_receiver_is_ignored() {
        let (tx, rx) = channel();
        drop(rx);
        tx.emit_operation_started("install");
    }

    #[test]
    fn config_events_route_to_config_source() {
        let event = AppEvent::Config(ConfigEvent::UnrecognizedProfile {
            profile: "staging".into(),
        });
        assert_eq!(event.event_source(), EventSource::CONFIG);
        assert_eq!(event.log_level(), tracing::Level::WARN);
        assert_eq!(event.log_target(), "pinstall::events::config");
    }

    #[test]
    fn events_serialize_with_domain_tag() {
        let event = AppEvent::General(GeneralEvent::OperationStarted {
            operation: "uninstall".into(),
        });
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["domain"], "general");
        assert_eq!(json["event"]["type"], "OperationStarted");
    }
}
