//! Service configuration
//!
//! Built once at startup from the environment (and `.env` when present)
//! and shared read-only through `AppState`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_SERVICE_NAME: &str = "AmplifAI Execution Engine v1";
pub const DEFAULT_LOG_FILE: &str = "logs/application.jsonl";
pub const DEFAULT_MEMORY_FILE: &str = "memory/memory_store.jsonl";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration for the engine
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub service_name: String,
    pub version: String,
    pub host: String,
    pub port: u16,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    pub log_file: PathBuf,
    pub memory_file: PathBuf,
    /// Chat webhook; `None` disables notifications
    pub webhook_url: Option<String>,
    pub webhook_timeout: Duration,
    /// Payload shape: `slack` (default) or `json`
    pub webhook_format: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            memory_file: PathBuf::from(DEFAULT_MEMORY_FILE),
            webhook_url: None,
            webhook_timeout: Duration::from_secs(5),
            webhook_format: None,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("⚠️  Failed to read .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.port,
        };

        let webhook_timeout = match get("WEBHOOK_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        key: "WEBHOOK_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        key: "WEBHOOK_TIMEOUT_SECS",
                        value: raw.clone(),
                        reason: e.to_string(),
                    })
                }
            },
            None => defaults.webhook_timeout,
        };

        let webhook_format = match get("WEBHOOK_FORMAT") {
            Some(raw) => {
                let format = raw.trim().to_ascii_lowercase();
                if format != "slack" && format != "json" {
                    return Err(ConfigError::Invalid {
                        key: "WEBHOOK_FORMAT",
                        value: raw,
                        reason: "expected \"slack\" or \"json\"".to_string(),
                    });
                }
                Some(format)
            }
            None => defaults.webhook_format,
        };

        Ok(Self {
            service_name: get("APP_NAME").unwrap_or(defaults.service_name),
            version: get("APP_VERSION").unwrap_or(defaults.version),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: get("LOG_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            memory_file: get("MEMORY_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.memory_file),
            webhook_url: get("SLACK_WEBHOOK_URL").map(|url| url.trim().to_string()),
            webhook_timeout,
            webhook_format,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            key: "HOST",
            value: raw,
            reason: e.to_string(),
        })
    }
}

/// Show only scheme and host of a URL so webhook secrets never leak into logs
pub fn mask_url(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            let host = rest.split('/').next().unwrap_or_default();
            format!("{scheme}://{host}/***")
        }
        None => "***".to_string(),
    }
}
