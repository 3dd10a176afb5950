//! pinstall - validate parallel install and uninstall configurations
//!
//! Loads the configuration (file, then environment, then CLI flags), runs the
//! install crate's preflight and renders the outcome.

mod cli;
mod display;
mod error;
mod logging;

use crate::cli::{Cli, Commands, GlobalArgs};
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use pinstall_config::InstallConfig;
use pinstall_events::{EventMessage, EventReceiver};
use pinstall_install::{InstallContext, Operation};
use std::process;
use tracing::{debug, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(json_mode, cli.global.debug);

    if let Err(e) = run(cli).await {
        debug!("Application error: {}", e);
        // Nothing left to report to if even this write fails
        let _ = OutputRenderer::new(json_mode).render_error(&e);
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting pinstall v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration with proper precedence:
    // 1. Start with file config (or defaults)
    let mut config = InstallConfig::load_or_default(cli.global.config.as_deref()).await?;

    // 2. Merge environment variables
    config.merge_env()?;

    // 3. Apply CLI flags (highest precedence)
    apply_cli_config(&mut config, &cli.global);

    let renderer = OutputRenderer::new(cli.global.json);

    match cli.command {
        Commands::Check { uninstall } => {
            let operation = if uninstall {
                Operation::Uninstall
            } else {
                Operation::Install
            };
            check(config, operation, &renderer)
        }
        Commands::Show => renderer.render_config(&config),
    }
}

fn check(
    config: InstallConfig,
    operation: Operation,
    renderer: &OutputRenderer,
) -> Result<(), CliError> {
    let (event_sender, mut event_receiver) = pinstall_events::channel();
    let result = InstallContext::new(operation, config)
        .with_event_sender(event_sender)
        .preflight();

    let events = drain_events(&mut event_receiver);

    let report = result?;
    for message in &events {
        renderer.render_event(message)?;
    }
    renderer.render_report(&report)?;
    info!(run_id = %report.run_id, "Command completed successfully");
    Ok(())
}

/// Forward everything the context emitted to tracing
fn drain_events(receiver: &mut EventReceiver) -> Vec<EventMessage> {
    let mut events = Vec::new();
    // The context (and its sender) is gone; nothing more will arrive
    while let Ok(message) = receiver.try_recv() {
        logging::log_event_with_tracing(&message);
        events.push(message);
    }
    events
}

/// Apply CLI configuration overrides (highest precedence)
fn apply_cli_config(config: &mut InstallConfig, global: &GlobalArgs) {
    if let Some(workers) = global.workers {
        config.workers_count = workers;
    }
    if let Some(profile) = &global.profile {
        config.profile.clone_from(profile);
    }
}

fn init_tracing(json_mode: bool, debug_enabled_flag: bool) {
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;

    if json_mode && !debug_enabled {
        // JSON mode: keep stdout clean for the report
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
    } else if json_mode {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("info,pinstall=debug")
                }),
            )
            .init();
    } else if debug_enabled {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(
                        "info,pinstall=debug,pinstall_config=debug,pinstall_install=debug",
                    )
                }),
            )
            .init();
    } else {
        // Normal mode: minimal logging to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }
}
