//! LogRecord - Operational log line

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LogLevel;
use crate::ports::Record;

/// One line of the operational log file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogRecord {
    /// When the event was recorded
    pub timestamp: DateTime<Utc>,
    /// Severity
    pub level: LogLevel,
    /// Event name (e.g. "campaign_launched")
    pub event: String,
    /// Event-specific data
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl LogRecord {
    /// Create a log record stamped with the current time
    pub fn new(level: LogLevel, event: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            event: event.into(),
            payload,
        }
    }

    pub fn info(event: impl Into<String>, payload: serde_json::Value) -> Self {
        Self::new(LogLevel::Info, event, payload)
    }

    pub fn warning(event: impl Into<String>, payload: serde_json::Value) -> Self {
        Self::new(LogLevel::Warning, event, payload)
    }
}

impl Record for LogRecord {
    fn category(&self) -> String {
        self.level.to_string()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
