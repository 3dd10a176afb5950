//! Well-known names shared by the loader, the validator and the CLI

/// Profile for small, non-HA evaluation clusters
pub const PROFILE_EVALUATION: &str = "evaluation";
/// Profile for production clusters
pub const PROFILE_PRODUCTION: &str = "production";

/// Profiles the installer knows about; anything else is passed through untouched
pub const KNOWN_PROFILES: &[&str] = &[PROFILE_EVALUATION, PROFILE_PRODUCTION];

pub const CONFIG_DIR_NAME: &str = "pinstall";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Labels used in validation messages
pub const COMPONENTS_LIST_LABEL: &str = "Components list";
pub const RESOURCE_PATH_LABEL: &str = "Resource path";
pub const CRD_PATH_LABEL: &str = "CRD path";

pub const ENV_WORKERS: &str = "PINSTALL_WORKERS";
pub const ENV_CANCEL_TIMEOUT: &str = "PINSTALL_CANCEL_TIMEOUT";
pub const ENV_QUIT_TIMEOUT: &str = "PINSTALL_QUIT_TIMEOUT";
pub const ENV_CLIENT_TIMEOUT: &str = "PINSTALL_CLIENT_TIMEOUT";
pub const ENV_PROFILE: &str = "PINSTALL_PROFILE";
pub const ENV_COMPONENTS_LIST: &str = "PINSTALL_COMPONENTS_LIST";
pub const ENV_RESOURCE_PATH: &str = "PINSTALL_RESOURCE_PATH";
pub const ENV_CRD_PATH: &str = "PINSTALL_CRD_PATH";
pub const ENV_VERSION: &str = "PINSTALL_VERSION";
