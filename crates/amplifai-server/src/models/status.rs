//! Service status DTOs

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Root endpoint metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub status: String,
    pub version: String,
    pub uptime: String,
    pub timestamp: DateTime<Utc>,
    pub docs: String,
}

/// Health check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub uptime: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Configuration diagnostics; secrets are masked
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfigDiagnostics {
    pub service: String,
    pub version: String,
    pub log_level: String,
    pub log_file_path: String,
    pub memory_file_path: String,
    pub webhook_configured: bool,
    /// Scheme and host only
    pub webhook_destination: Option<String>,
    pub webhook_timeout_secs: u64,
}

/// Result of a synchronous webhook delivery test
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WebhookTestResponse {
    pub configured: bool,
    pub test_passed: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// `"1d 2h 3m 4s"`, dropping leading zero units
pub fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (days, rem) = (secs / 86_400, secs % 86_400);
    let (hours, rem) = (rem / 3_600, rem % 3_600);
    let (minutes, seconds) = (rem / 60, rem % 60);

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {seconds}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}
