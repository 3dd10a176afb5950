#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration for parallel install and uninstall runs
//!
//! [`InstallConfig`] carries the tunables of a run (workers, timeouts, retry
//! backoff, revision history) plus the paths and version it operates on.
//! A record can be built in code, or loaded from:
//! - Default values (hard-coded)
//! - Configuration file (~/.config/pinstall/config.toml)
//! - Environment variables
//!
//! Loading never validates; call [`InstallConfig::validate`] before handing
//! the record to an install or uninstall run.

pub mod constants;
mod install;
mod validation;

pub use constants::*;
pub use install::InstallConfig;
