//! Configuration error types

use std::borrow::Cow;
use std::time::Duration;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("parse error: {message}")]
    ParseError { message: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("failed to serialize config: {error}")]
    SerializeError { error: String },

    #[error("workers count cannot be <= 0")]
    InvalidWorkerCount { count: usize },

    #[error("{description} is empty")]
    EmptyPath { description: String },

    #[error("{description} '{path}' not found")]
    PathNotFound { description: String, path: String },

    #[error("version is empty")]
    EmptyVersion,

    #[error("quit timeout ({quit:?}) must be greater than cancel timeout ({cancel:?})")]
    InvalidTimeouts { cancel: Duration, quit: Duration },
}

impl ConfigError {
    /// Whether this error came out of record validation rather than loading
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidWorkerCount { .. }
                | Self::EmptyPath { .. }
                | Self::PathNotFound { .. }
                | Self::EmptyVersion
                | Self::InvalidTimeouts { .. }
        )
    }
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => {
                Some("Provide a configuration file with --config or create the default one.")
            }
            Self::InvalidValue { .. } | Self::ParseError { .. } => {
                Some("Fix the configuration value and retry the command.")
            }
            Self::InvalidWorkerCount { .. } => Some("Set workers_count to at least 1."),
            Self::EmptyPath { .. } => {
                Some("Set the path in the configuration file or via environment variables.")
            }
            Self::PathNotFound { .. } => Some("Check that the path exists and is readable."),
            Self::EmptyVersion => Some("Set the version to install or uninstall."),
            Self::InvalidTimeouts { .. } => {
                Some("Raise quit_timeout above cancel_timeout so workers can wind down.")
            }
            Self::SerializeError { .. } => None,
        }
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::NotFound { .. } => "config.not_found",
            Self::ParseError { .. } => "config.parse_error",
            Self::InvalidValue { .. } => "config.invalid_value",
            Self::SerializeError { .. } => "config.serialize_error",
            Self::InvalidWorkerCount { .. } => "config.invalid_worker_count",
            Self::EmptyPath { .. } => "config.empty_path",
            Self::PathNotFound { .. } => "config.path_not_found",
            Self::EmptyVersion => "config.empty_version",
            Self::InvalidTimeouts { .. } => "config.invalid_timeouts",
        };
        Some(code)
    }
}
