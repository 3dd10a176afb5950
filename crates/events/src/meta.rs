use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::Level;
use uuid::Uuid;

/// Structured metadata that accompanies every event emission.
///
/// Consumers use it to correlate events belonging to one operation and to
/// route them to the right log level.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMeta {
    /// Unique identifier for this specific event.
    pub event_id: Uuid,
    /// High-level correlation identifier (operation id, config path, etc.).
    pub correlation_id: Option<String>,
    /// Timestamp captured at emission time.
    pub timestamp: DateTime<Utc>,
    /// Severity used for routing to logging systems.
    pub level: EventLevel,
    /// Subsystem/component that originated the event.
    pub source: EventSource,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl EventMeta {
    /// Create a new metadata instance for a given source and level.
    #[must_use]
    pub fn new(level: impl Into<EventLevel>, source: impl Into<EventSource>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            correlation_id: None,
            timestamp: Utc::now(),
            level: level.into(),
            source: source.into(),
            labels: BTreeMap::new(),
        }
    }
}

/// Lightweight severity levels used by the event system.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EventLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Level> for EventLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::TRACE => EventLevel::Trace,
            Level::DEBUG => EventLevel::Debug,
            Level::INFO => EventLevel::Info,
            Level::WARN => EventLevel::Warn,
            Level::ERROR => EventLevel::Error,
        }
    }
}

/// Component/feature that originated the event.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventSource(Cow<'static, str>);

impl EventSource {
    pub const GENERAL: Self = Self::const_str("general");
    pub const CONFIG: Self = Self::const_str("config");

    const fn const_str(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Borrow the underlying identifier used for logging/telemetry.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
