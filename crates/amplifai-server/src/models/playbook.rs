//! Playbook DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use amplifai::{PlaybookUpload, DEFAULT_PLAYBOOK_VERSION};

use crate::application::PlaybookReceipt;

/// Request to upload a playbook as JSON
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "playbook_name": "Social Media Campaign",
    "content": {
        "steps": [
            {"action": "create_post", "platform": "instagram"},
            {"action": "schedule_post", "time": "9:00 AM"}
        ]
    },
    "version": "1.0",
    "tags": ["social", "automated"]
}))]
pub struct PlaybookUploadRequest {
    pub playbook_name: String,
    /// Playbook content (any JSON object)
    #[serde(default)]
    #[schema(value_type = Object)]
    pub content: serde_json::Map<String, serde_json::Value>,
    /// Defaults to "1.0"
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl From<PlaybookUploadRequest> for PlaybookUpload {
    fn from(req: PlaybookUploadRequest) -> Self {
        PlaybookUpload::new(req.playbook_name, serde_json::Value::Object(req.content))
            .with_version(
                req.version
                    .unwrap_or_else(|| DEFAULT_PLAYBOOK_VERSION.to_string()),
            )
            .with_tags(req.tags.unwrap_or_default())
    }
}

/// Multipart form for `/upload-playbook-file` (documentation only)
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct PlaybookFileForm {
    /// Any file type; stored as a summary only
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub playbook_name: String,
    /// Defaults to "1.0"
    pub version: Option<String>,
    /// Comma-separated tags
    pub tags: Option<String>,
}

/// Playbook upload response (JSON and file variants)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaybookUploadResponse {
    pub status: String,
    pub playbook_id: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl PlaybookUploadResponse {
    pub fn from_receipt(receipt: PlaybookReceipt, message: &str) -> Self {
        Self {
            status: "received".to_string(),
            playbook_id: receipt.playbook_id.into_string(),
            timestamp: receipt.timestamp,
            message: message.to_string(),
        }
    }
}
