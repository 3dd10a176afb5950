//! Output rendering and formatting

use crate::error::CliError;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use console::{Style, Term};
use pinstall_config::InstallConfig;
use pinstall_events::{AppEvent, ConfigEvent, EventMessage};
use pinstall_install::PreflightReport;
use std::io;

/// Output renderer for CLI results
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    term: Term,
}

impl OutputRenderer {
    pub fn new(json_output: bool) -> Self {
        Self {
            json_output,
            term: Term::stdout(),
        }
    }

    /// Surface warnings from the event stream; everything else goes to tracing only
    pub fn render_event(&self, message: &EventMessage) -> io::Result<()> {
        if self.json_output {
            return Ok(());
        }
        let AppEvent::Config(ConfigEvent::UnrecognizedProfile { profile }) = &message.event else {
            return Ok(());
        };
        let warning = format!("profile '{profile}' is not a known profile, passing it through");
        let style = Style::new().yellow();
        self.term
            .write_line(&format!("{} {warning}", style.apply_to("warning:")))
    }

    /// Render a successful preflight
    pub fn render_report(&self, report: &PreflightReport) -> io::Result<()> {
        if self.json_output {
            let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
            return self.term.write_line(&json);
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![Cell::new("Setting"), Cell::new("Value")]);

        let profile = if report.profile.is_empty() {
            "(none)".to_string()
        } else {
            report.profile.clone()
        };
        let rows = [
            ("operation", report.operation.to_string()),
            ("version", report.version.clone()),
            ("profile", profile),
            ("workers", report.workers_count.to_string()),
            ("cancel timeout", format!("{}s", report.cancel_timeout_secs)),
            ("quit timeout", format!("{}s", report.quit_timeout_secs)),
            ("client timeout", format!("{}s", report.client_timeout_secs)),
        ];
        for (name, value) in rows {
            table.add_row(vec![Cell::new(name), Cell::new(value)]);
        }

        self.term.write_line(&table.to_string())?;
        let ok = Style::new().green().bold();
        self.term.write_line(&format!(
            "{} configuration is valid for {}",
            ok.apply_to("[OK]"),
            report.operation
        ))
    }

    /// Render a command failure: a JSON document on stdout, or text on stderr
    pub fn render_error(&self, err: &CliError) -> io::Result<()> {
        if self.json_output {
            let json = serde_json::to_string_pretty(&error_json(err)).map_err(io::Error::other)?;
            return self.term.write_line(&json);
        }
        Term::stderr().write_line(&format!("Error: {err}"))
    }

    /// Render the effective configuration
    pub fn render_config(&self, config: &InstallConfig) -> Result<(), CliError> {
        if self.json_output {
            let json = serde_json::to_string_pretty(config).map_err(pinstall_errors::Error::from)?;
            self.term.write_line(&json)?;
        } else {
            self.term.write_str(&config.to_toml()?)?;
        }
        Ok(())
    }
}

/// JSON document printed for a failed command
pub fn error_json(err: &CliError) -> serde_json::Value {
    serde_json::json!({
        "ok": false,
        "error": err.failure(),
    })
}
