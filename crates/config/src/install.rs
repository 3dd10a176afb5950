//! The install/uninstall configuration record and its loaders

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, ENV_CANCEL_TIMEOUT, ENV_CLIENT_TIMEOUT,
    ENV_COMPONENTS_LIST, ENV_CRD_PATH, ENV_PROFILE, ENV_QUIT_TIMEOUT, ENV_RESOURCE_PATH,
    ENV_VERSION, ENV_WORKERS,
};
use pinstall_errors::{ConfigError, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tokio::fs;
use tracing::debug;

/// Parameters for a parallel install or uninstall run.
///
/// Install and uninstall share one record. Callers that need different
/// settings for each build two records.
///
/// The record does not carry a logger; components that report progress take
/// an `EventSender` from their caller instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Number of parallel workers
    pub workers_count: usize,
    /// After this time the workers' cancellation is signaled. Work blocked
    /// inside the package-management client may keep running.
    #[serde(with = "duration_secs")]
    pub cancel_timeout: Duration,
    /// After this time the run reports failure to the caller even if workers
    /// are still active. Must be greater than `cancel_timeout`.
    #[serde(with = "duration_secs")]
    pub quit_timeout: Duration,
    /// Timeout handed to the underlying package-management client
    pub client_timeout_seconds: u64,
    /// Initial interval of the exponential retry backoff
    pub backoff_initial_interval_seconds: u64,
    /// Upper bound on the total time spent retrying
    pub backoff_max_elapsed_seconds: u64,
    /// Maximum number of revisions kept per release
    pub max_revision_history: usize,
    /// Deployment profile, e.g. "evaluation" or "production"
    pub profile: String,
    pub components_list_file: PathBuf,
    pub resource_path: PathBuf,
    pub crd_path: PathBuf,
    pub version: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            workers_count: 4,
            cancel_timeout: Duration::from_secs(20 * 60),
            quit_timeout: Duration::from_secs(25 * 60),
            client_timeout_seconds: 360,
            backoff_initial_interval_seconds: 3,
            backoff_max_elapsed_seconds: 5 * 60,
            max_revision_history: 10,
            profile: String::new(),
            components_list_file: PathBuf::new(),
            resource_path: PathBuf::new(),
            crd_path: PathBuf::new(),
            version: String::new(),
        }
    }
}

impl InstallConfig {
    #[must_use]
    pub fn with_workers(mut self, workers_count: usize) -> Self {
        self.workers_count = workers_count;
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, cancel: Duration, quit: Duration) -> Self {
        self.cancel_timeout = cancel;
        self.quit_timeout = quit;
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set the components list, resource and CRD paths in one go
    #[must_use]
    pub fn with_paths(
        mut self,
        components_list_file: impl Into<PathBuf>,
        resource_path: impl Into<PathBuf>,
        crd_path: impl Into<PathBuf>,
    ) -> Self {
        self.components_list_file = components_list_file.into();
        self.resource_path = resource_path.into();
        self.crd_path = crd_path.into();
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Client timeout as a `Duration`
    #[must_use]
    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.client_timeout_seconds)
    }

    /// Initial retry backoff interval as a `Duration`
    #[must_use]
    pub fn backoff_initial_interval(&self) -> Duration {
        Duration::from_secs(self.backoff_initial_interval_seconds)
    }

    /// Maximum total retry time as a `Duration`
    #[must_use]
    pub fn backoff_max_elapsed(&self) -> Duration {
        Duration::from_secs(self.backoff_max_elapsed_seconds)
    }

    /// Case-insensitive profile comparison
    #[must_use]
    pub fn profile_is(&self, name: &str) -> bool {
        self.profile.eq_ignore_ascii_case(name)
    }

    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from file
    ///
    /// Fields missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist, an I/O
    /// error if it exists but cannot be read, or a parse error if the
    /// contents are not valid TOML.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::from(ConfigError::NotFound {
                    path: path.display().to_string(),
                })
            } else {
                Error::io_with_path(&e, path)
            }
        })?;

        let config = Self::from_toml(&contents)?;
        debug!(path = %path.display(), "loaded install configuration");
        Ok(config)
    }

    /// Parse configuration from a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or a field has the
    /// wrong type.
    pub fn from_toml(contents: &str) -> Result<Self, Error> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Serialize the configuration to TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError {
                error: e.to_string(),
            })
            .map_err(Into::into)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub async fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path).await
        } else {
            debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Merge with environment variables
    ///
    /// Timeouts are read as whole seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        if let Some(workers) = parse_env(ENV_WORKERS)? {
            self.workers_count = workers;
        }
        if let Some(secs) = parse_env(ENV_CANCEL_TIMEOUT)? {
            self.cancel_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_env(ENV_QUIT_TIMEOUT)? {
            self.quit_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_env(ENV_CLIENT_TIMEOUT)? {
            self.client_timeout_seconds = secs;
        }
        if let Ok(profile) = std::env::var(ENV_PROFILE) {
            self.profile = profile;
        }
        if let Some(path) = std::env::var_os(ENV_COMPONENTS_LIST) {
            self.components_list_file = PathBuf::from(path);
        }
        if let Some(path) = std::env::var_os(ENV_RESOURCE_PATH) {
            self.resource_path = PathBuf::from(path);
        }
        if let Some(path) = std::env::var_os(ENV_CRD_PATH) {
            self.crd_path = PathBuf::from(path);
        }
        if let Ok(version) = std::env::var(ENV_VERSION) {
            self.version = version;
        }

        Ok(())
    }
}

fn parse_env<T: FromStr>(var: &str) -> Result<Option<T>, Error> {
    let Ok(value) = std::env::var(var) else {
        return Ok(None);
    };
    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ConfigError::InvalidValue {
            field: var.to_string(),
            value,
        }
        .into()),
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S>(duration: &Duration, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_quit_after_cancel() {
        let config = InstallConfig::default();
        assert!(config.quit_timeout > config.cancel_timeout);
        assert_eq!(config.workers_count, 4);
        assert!(config.version.is_empty());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = InstallConfig::from_toml(
            r#"
workers_count = 8
cancel_timeout = 60
version = "2.0.0"
"#,
        )
        .unwrap();

        assert_eq!(config.workers_count, 8);
        assert_eq!(config.cancel_timeout, Duration::from_secs(60));
        assert_eq!(config.quit_timeout, InstallConfig::default().quit_timeout);
        assert_eq!(config.version, "2.0.0");
        assert_eq!(config.max_revision_history, 10);
    }

    #[test]
    fn negative_workers_are_rejected_at_parse_time() {
        let err = InstallConfig::from_toml("workers_count = -1").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn toml_output_reloads_to_the_same_record() {
        let config = InstallConfig::default()
            .with_workers(2)
            .with_profile("production")
            .with_paths("/a/components.yaml", "/a/resources", "/a/crds")
            .with_version("1.2.3");

        let text = config.to_toml().unwrap();
        assert!(text.contains("cancel_timeout = 1200"));
        assert_eq!(InstallConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn duration_accessors() {
        let config = InstallConfig::default();
        assert_eq!(config.client_timeout(), Duration::from_secs(360));
        assert_eq!(config.backoff_initial_interval(), Duration::from_secs(3));
        assert_eq!(config.backoff_max_elapsed(), Duration::from_secs(300));
    }

    #[test]
    fn profile_comparison_ignores_case() {
        let config = InstallConfig::default().with_profile("Production");
        assert!(config.profile_is("production"));
        assert!(!config.profile_is("evaluation"));
    }
}
