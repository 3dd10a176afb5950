//! Pre-run checks for [`InstallConfig`]

use crate::constants::{COMPONENTS_LIST_LABEL, CRD_PATH_LABEL, RESOURCE_PATH_LABEL};
use crate::InstallConfig;
use pinstall_errors::{ConfigError, Error};
use std::path::Path;

impl InstallConfig {
    /// Validate the configuration before starting a run
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// worker count, components list, resource path, CRD path, version,
    /// and finally that `quit_timeout` exceeds `cancel_timeout`.
    ///
    /// Path checks only stat the filesystem; a path that exists now may be
    /// gone by the time it is used.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] of the first failing check.
    pub fn validate(&self) -> Result<(), Error> {
        if self.workers_count == 0 {
            return Err(ConfigError::InvalidWorkerCount {
                count: self.workers_count,
            }
            .into());
        }
        path_exists(&self.components_list_file, COMPONENTS_LIST_LABEL)?;
        path_exists(&self.resource_path, RESOURCE_PATH_LABEL)?;
        path_exists(&self.crd_path, CRD_PATH_LABEL)?;
        if self.version.is_empty() {
            return Err(ConfigError::EmptyVersion.into());
        }
        if self.quit_timeout <= self.cancel_timeout {
            return Err(ConfigError::InvalidTimeouts {
                cancel: self.cancel_timeout,
                quit: self.quit_timeout,
            }
            .into());
        }
        Ok(())
    }
}

fn path_exists(path: &Path, description: &str) -> Result<(), Error> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath {
            description: description.to_string(),
        }
        .into());
    }
    // Only a definite "does not exist" fails; other stat errors pass through.
    if let Ok(false) = path.try_exists() {
        return Err(ConfigError::PathNotFound {
            description: description.to_string(),
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(())
}
