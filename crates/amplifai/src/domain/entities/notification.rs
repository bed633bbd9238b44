//! Notification - Outbound announcement of something that happened
//!
//! Built by the application layer, rendered and delivered by a
//! [`Notifier`](crate::Notifier) adapter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CampaignRequest, PlaybookUpload};

/// What a notification is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    CampaignLaunched,
    PlaybookUploaded,
    Error,
    /// Manual connectivity check
    Test,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::CampaignLaunched => write!(f, "campaign_launched"),
            NotificationKind::PlaybookUploaded => write!(f, "playbook_uploaded"),
            NotificationKind::Error => write!(f, "error"),
            NotificationKind::Test => write!(f, "test"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    /// One-line human summary
    pub summary: String,
    /// Structured detail used by formatters
    pub detail: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        summary: impl Into<String>,
        detail: serde_json::Value,
    ) -> Self {
        Self {
            kind,
            summary: summary.into(),
            detail,
            timestamp: Utc::now(),
        }
    }

    pub fn campaign_launched(campaign: &CampaignRequest) -> Self {
        Self::new(
            NotificationKind::CampaignLaunched,
            format!("Campaign {} has been launched!", campaign.campaign_id),
            serde_json::json!({
                "campaign_id": campaign.campaign_id,
                "budget": campaign.budget,
                "audience": campaign.audience,
                "creatives": campaign.creatives,
            }),
        )
    }

    pub fn playbook_uploaded(playbook_id: &str, playbook: &PlaybookUpload) -> Self {
        Self::new(
            NotificationKind::PlaybookUploaded,
            format!("Playbook '{}' has been uploaded!", playbook.playbook_name),
            serde_json::json!({
                "playbook_id": playbook_id,
                "playbook_name": playbook.playbook_name,
                "version": playbook.version,
                "tags": playbook.tags,
            }),
        )
    }

    pub fn error(endpoint: &str, message: impl Into<String>, detail: serde_json::Value) -> Self {
        let message = message.into();
        Self::new(
            NotificationKind::Error,
            format!("Error in {endpoint}: {message}"),
            serde_json::json!({
                "endpoint": endpoint,
                "message": message,
                "details": detail,
            }),
        )
    }

    pub fn test(service_name: &str) -> Self {
        Self::new(
            NotificationKind::Test,
            format!("Integration test from {service_name}"),
            serde_json::json!({ "service": service_name }),
        )
    }
}
