use pinstall_config::InstallConfig;
use pinstall_events::{AppEvent, EventEmitter, EventMeta, EventSender};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Kind of run a context is prepared for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Install,
    Uninstall,
}

impl Operation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Uninstall => "uninstall",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installation context
///
/// The configuration is shared, never copied or mutated. The event sender is
/// the caller's; dropping the context does not close the caller's receiver.
#[derive(Clone, Debug)]
pub struct InstallContext {
    /// Operation this context prepares
    pub operation: Operation,
    /// Configuration the run will use
    pub config: Arc<InstallConfig>,
    /// Identifier stamped on every event emitted through this context
    pub run_id: Uuid,
    /// Event sender for progress reporting
    pub event_sender: Option<EventSender>,
}

impl InstallContext {
    /// Create a new context without an event sender
    #[must_use]
    pub fn new(operation: Operation, config: impl Into<Arc<InstallConfig>>) -> Self {
        Self {
            operation,
            config: config.into(),
            run_id: Uuid::new_v4(),
            event_sender: None,
        }
    }

    /// Shorthand for an install context
    #[must_use]
    pub fn install(config: impl Into<Arc<InstallConfig>>) -> Self {
        Self::new(Operation::Install, config)
    }

    /// Shorthand for an uninstall context
    #[must_use]
    pub fn uninstall(config: impl Into<Arc<InstallConfig>>) -> Self {
        Self::new(Operation::Uninstall, config)
    }

    /// Set the event sender for progress reporting
    #[must_use]
    pub fn with_event_sender(mut self, sender: EventSender) -> Self {
        self.event_sender = Some(sender);
        self
    }

    #[must_use]
    pub fn with_run_id(mut self, run_id: Uuid) -> Self {
        self.run_id = run_id;
        self
    }
}

impl EventEmitter for InstallContext {
    fn event_sender(&self) -> Option<&EventSender> {
        self.event_sender.as_ref()
    }

    fn enrich_event_meta(&self, _event: &AppEvent, meta: &mut EventMeta) {
        meta.correlation_id = Some(self.run_id.to_string());
        meta.labels
            .insert("operation".to_string(), self.operation.as_str().to_string());
    }
}
