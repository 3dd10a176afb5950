//! Configuration checks run before an install or uninstall starts

use crate::{InstallContext, PreflightReport};
use pinstall_config::KNOWN_PROFILES;
use pinstall_errors::{Error, UserFacingError};
use pinstall_events::{AppEvent, ConfigEvent, EventEmitter, FailureContext};
use tracing::debug;

impl InstallContext {
    /// Validate the configuration and report the outcome through the
    /// context's event sender.
    ///
    /// The checks are those of [`pinstall_config::InstallConfig::validate`];
    /// a success here does not guarantee the paths still exist when the run
    /// reads them.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure unchanged.
    pub fn preflight(&self) -> Result<PreflightReport, Error> {
        let operation = self.operation.as_str();
        debug!(%operation, run_id = %self.run_id, "running preflight");

        self.emit_operation_started(operation);
        self.emit(AppEvent::Config(ConfigEvent::ValidationStarted {
            operation: operation.to_string(),
        }));

        if let Err(err) = self.config.validate() {
            debug!(%operation, error = %err, "configuration rejected");
            self.emit(AppEvent::Config(ConfigEvent::ValidationFailed {
                operation: operation.to_string(),
                failure: FailureContext::from_error(&err),
            }));
            self.emit_operation_failed(operation, err.user_message());
            return Err(err);
        }

        let config = &self.config;
        if !config.profile.is_empty()
            && !KNOWN_PROFILES.iter().any(|known| config.profile_is(known))
        {
            self.emit(AppEvent::Config(ConfigEvent::UnrecognizedProfile {
                profile: config.profile.clone(),
            }));
        }

        self.emit(AppEvent::Config(ConfigEvent::Validated {
            operation: operation.to_string(),
            workers_count: config.workers_count,
            profile: config.profile.clone(),
            version: config.version.clone(),
            cancel_timeout: config.cancel_timeout,
            quit_timeout: config.quit_timeout,
        }));
        self.emit_operation_completed(operation, true);

        Ok(PreflightReport::from_context(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operation;
    use pinstall_config::InstallConfig;
    use pinstall_errors::ConfigError;
    use pinstall_events::{EventMessage, EventReceiver, GeneralEvent};
    use tempfile::TempDir;

    fn valid_config(dir: &TempDir) -> InstallConfig {
        let components = dir.path().join("components.yaml");
        std::fs::write(&components, "components: []\n").unwrap();
        InstallConfig::default()
            .with_paths(components, dir.path(), dir.path())
            .with_version("1.2.3")
    }

    fn drain(rx: &mut EventReceiver) -> Vec<EventMessage> {
        let mut messages = Vec::new();
        while let Ok(message) = rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    #[test]
    fn successful_preflight_reports_and_emits() {
        let dir = TempDir::new().unwrap();
        let (tx, mut rx) = pinstall_events::channel();
        let ctx = InstallContext::install(valid_config(&dir).with_workers(6))
            .with_event_sender(tx);

        let report = ctx.preflight().unwrap();
        assert_eq!(report.operation, Operation::Install);
        assert_eq!(report.workers_count, 6);
        assert_eq!(report.version, "1.2.3");
        assert_eq!(report.run_id, ctx.run_id);

        let events = drain(&mut rx);
        assert!(matches!(
            events.first().map(|m| &m.event),
            Some(AppEvent::General(GeneralEvent::OperationStarted { .. }))
        ));
        assert!(events.iter().any(|m| matches!(
            &m.event,
            AppEvent::Config(ConfigEvent::Validated { workers_count: 6, .. })
        )));
        assert!(matches!(
            events.last().map(|m| &m.event),
            Some(AppEvent::General(GeneralEvent::OperationCompleted { success: true, .. }))
        ));

        let run_id = ctx.run_id.to_string();
        for message in &events {
            assert_eq!(message.meta.correlation_id.as_deref(), Some(run_id.as_str()));
            assert_eq!(
                message.meta.labels.get("operation").map(String::as_str),
                Some("install")
            );
        }
    }

    #[test]
    fn failed_preflight_returns_validation_error() {
        let (tx, mut rx) = pinstall_events::channel();
        let ctx = InstallContext::uninstall(InstallConfig::default().with_workers(0))
            .with_event_sender(tx);

        let err = ctx.preflight().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidWorkerCount { .. })
        ));

        let events = drain(&mut rx);
        let failure = events.iter().find_map(|m| match &m.event {
            AppEvent::Config(ConfigEvent::ValidationFailed { failure, .. }) => Some(failure),
            _ => None,
        });
        let failure = failure.expect("validation failure event");
        assert_eq!(failure.message, "workers count cannot be <= 0");
        assert_eq!(failure.code.as_deref(), Some("config.invalid_worker_count"));
        assert!(!failure.retryable);
        assert!(matches!(
            events.last().map(|m| &m.event),
            Some(AppEvent::General(GeneralEvent::OperationFailed { .. }))
        ));
    }

    #[test]
    fn unknown_profile_warns_but_passes() {
        let dir = TempDir::new().unwrap();
        let (tx, mut rx) = pinstall_events::channel();
        let ctx = InstallContext::install(valid_config(&dir).with_profile("staging"))
            .with_event_sender(tx);

        assert!(ctx.preflight().is_ok());
        let events = drain(&mut rx);
        assert!(events.iter().any(|m| matches!(
            &m.event,
            AppEvent::Config(ConfigEvent::UnrecognizedProfile { profile }) if profile == "staging"
        )));
    }

    #[test]
    fn known_profile_does_not_warn() {
        let dir = TempDir::new().unwrap();
        let (tx, mut rx) = pinstall_events::channel();
        let ctx = InstallContext::install(valid_config(&dir).with_profile("Evaluation"))
            .with_event_sender(tx);

        assert!(ctx.preflight().is_ok());
        assert!(!drain(&mut rx).iter().any(|m| matches!(
            &m.event,
            AppEvent::Config(ConfigEvent::UnrecognizedProfile { .. })
        )));
    }

    #[test]
    fn preflight_without_sender_still_validates() {
        let ctx = InstallContext::new(Operation::Install, InstallConfig::default());
        assert!(ctx.preflight().is_err());
    }

    #[test]
    fn report_serializes_operation_name() {
        let dir = TempDir::new().unwrap();
        let report = InstallContext::uninstall(valid_config(&dir))
            .preflight()
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["operation"], "uninstall");
        assert_eq!(json["quit_timeout_secs"], 1500);
    }
}
