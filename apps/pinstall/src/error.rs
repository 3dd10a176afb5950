//! CLI error handling

use std::fmt;

use pinstall_errors::UserFacingError;
use pinstall_events::FailureContext;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Configuration or validation error
    Config(pinstall_errors::Error),
    /// I/O error
    Io(std::io::Error),
}

impl CliError {
    /// Structured form used for `--json` output
    pub fn failure(&self) -> FailureContext {
        match self {
            CliError::Config(e) => FailureContext::from_error(e),
            CliError::Io(e) => FailureContext::new(
                Some("error.io"),
                format!("I/O error: {e}"),
                None::<String>,
                false,
            ),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                Ok(())
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<pinstall_errors::Error> for CliError {
    fn from(e: pinstall_errors::Error) -> Self {
        CliError::Config(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinstall_errors::ConfigError;

    #[test]
    fn config_errors_render_code_and_hint() {
        let err = CliError::from(pinstall_errors::Error::from(ConfigError::EmptyVersion));
        let rendered = err.to_string();
        assert!(rendered.starts_with("version is empty"));
        assert!(rendered.contains("Code: config.empty_version"));
        assert!(rendered.contains("Hint: "));
    }

    #[test]
    fn failure_carries_code_for_both_kinds() {
        let config = CliError::from(pinstall_errors::Error::from(ConfigError::EmptyVersion));
        let failure = config.failure();
        assert_eq!(failure.code.as_deref(), Some("config.empty_version"));
        assert_eq!(failure.message, "version is empty");

        let io = CliError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdout closed",
        ));
        let failure = io.failure();
        assert_eq!(failure.code.as_deref(), Some("error.io"));
        assert_eq!(failure.message, "I/O error: stdout closed");
        assert!(failure.hint.is_none());
    }
}
