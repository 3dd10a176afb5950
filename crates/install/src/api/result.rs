use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::context::{InstallContext, Operation};

/// Summary of a configuration that passed preflight
#[derive(Debug, Clone, Serialize)]
pub struct PreflightReport {
    pub run_id: Uuid,
    pub operation: Operation,
    pub workers_count: usize,
    pub profile: String,
    pub version: String,
    pub cancel_timeout_secs: u64,
    pub quit_timeout_secs: u64,
    pub client_timeout_secs: u64,
    pub checked_at: DateTime<Utc>,
}

impl PreflightReport {
    pub(crate) fn from_context(ctx: &InstallContext) -> Self {
        let config = &ctx.config;
        Self {
            run_id: ctx.run_id,
            operation: ctx.operation,
            workers_count: config.workers_count,
            profile: config.profile.clone(),
            version: config.version.clone(),
            cancel_timeout_secs: config.cancel_timeout.as_secs(),
            quit_timeout_secs: config.quit_timeout.as_secs(),
            client_timeout_secs: config.client_timeout_seconds,
            checked_at: Utc::now(),
        }
    }
}
