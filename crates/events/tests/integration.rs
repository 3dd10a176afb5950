//! Integration tests for events

#[cfg(test)]
mod tests {
    use pinstall_errors::{ConfigError, Error};
    use pinstall_events::*;

    #[tokio::test]
    async fn test_event_sender_ext() {
        let (tx, mut rx) = channel();

        tx.emit_operation_started("install");
        tx.emit_operation_failed("install", "version is empty");

        let first = rx.recv().await.unwrap();
        assert!(matches!(
            first.event,
            AppEvent::General(GeneralEvent::OperationStarted { .. })
        ));
        assert_eq!(first.meta.level, EventLevel::Info);

        let second = rx.recv().await.unwrap();
        assert!(matches!(
            second.event,
            AppEvent::General(GeneralEvent::OperationFailed { .. })
        ));
        assert_eq!(second.meta.level, EventLevel::Error);
    }

    #[tokio::test]
    async fn test_dropped_receiver() {
        let (tx, rx) = channel();
        drop(rx);

        // Should not panic when receiver is dropped
        tx.emit_operation_completed("install", true);
    }

    #[test]
    fn test_failure_context_from_config_error() {
        let err: Error = ConfigError::PathNotFound {
            description: "CRD path".into(),
            path: "/srv/crds".into(),
        }
        .into();

        let failure = FailureContext::from_error(&err);
        assert_eq!(failure.message, "CRD path '/srv/crds' not found");
        assert_eq!(failure.code.as_deref(), Some("config.path_not_found"));
        assert!(failure.hint.is_some());
        assert!(!failure.retryable);
    }

    #[test]
    fn test_message_round_trips_through_json() {
        let event = AppEvent::Config(ConfigEvent::ValidationStarted {
            operation: "install".into(),
        });
        let message = EventMessage::new(
            EventMeta::new(event.log_level(), event.event_source()),
            event,
        );
        let json = serde_json::to_string(&message).unwrap();
        let back: EventMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back.event, message.event);
        assert_eq!(back.meta.source, EventSource::CONFIG);
        assert_eq!(back.meta.event_id, message.meta.event_id);
    }

    #[test]
    fn test_level_conversion() {
        assert_eq!(EventLevel::from(tracing::Level::INFO), EventLevel::Info);
    }
}
