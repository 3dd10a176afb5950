//! Command line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pinstall - validate parallel install and uninstall configurations
#[derive(Parser)]
#[command(name = "pinstall")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate parallel install and uninstall configurations")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of parallel workers
    #[arg(long, global = true, value_name = "N")]
    pub workers: Option<usize>,

    /// Override the deployment profile
    #[arg(long, global = true)]
    pub profile: Option<String>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Validate the effective configuration for a run
    Check {
        /// Check for an uninstall run instead of an install run
        #[arg(long)]
        uninstall: bool,
    },

    /// Print the effective configuration as TOML
    Show,
}
