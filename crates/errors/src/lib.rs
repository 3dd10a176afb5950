#![warn(mismatched_lifetime_syntaxes)]
#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for pinstall
//!
//! This crate provides fine-grained error types organized by domain.
//! All error types implement Clone where possible for easier handling.

use std::borrow::Cow;

use thiserror::Error;

pub mod config;

pub use config::ConfigError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("I/O error on {}: {message}", path.display())]
    Io {
        kind: std::io::ErrorKind,
        message: String,
        path: std::path::PathBuf,
    },
}

impl Error {
    /// Create an Io error with an associated path
    pub fn io_with_path(err: &std::io::Error, path: impl Into<std::path::PathBuf>) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
            path: path.into(),
        }
    }

    /// Borrow the configuration error, if this is one
    #[must_use]
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON error: {err}"))
    }
}

/// Minimal interface for rendering user-facing error information without
/// requiring heavyweight envelopes.
pub trait UserFacingError {
    /// Short message suitable for CLI output.
    fn user_message(&self) -> Cow<'_, str>;

    /// Optional remediation hint.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }

    /// Whether retrying the same operation is likely to succeed.
    fn is_retryable(&self) -> bool {
        false
    }

    /// Stable error code for analytics / structured reporting.
    fn user_code(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Error::Config(err) => err.user_message(),
            Error::Io { .. } | Error::Internal(_) => Cow::Owned(self.to_string()),
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::Config(err) => err.user_hint(),
            _ => None,
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            Error::Config(err) => err.is_retryable(),
            Error::Io { .. } => true,
            Error::Internal(_) => false,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Error::Config(err) => err.user_code(),
            Error::Internal(_) => Some("error.internal"),
            Error::Io { .. } => Some("error.io"),
        }
    }
}
