#![warn(clippy::pedantic)]
#![deny(clippy::all)]

//! Install and uninstall entry points for pinstall
//!
//! An [`InstallContext`] ties one [`pinstall_config::InstallConfig`] to an
//! operation and to the caller's event channel. Running
//! [`InstallContext::preflight`] validates the configuration and reports the
//! outcome through that channel before any work is scheduled.

mod api;
mod preflight;

pub use api::context::{InstallContext, Operation};
pub use api::result::PreflightReport;

// Re-export EventSender for callers building contexts
pub use pinstall_events::EventSender;
