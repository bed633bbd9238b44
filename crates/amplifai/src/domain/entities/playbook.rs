//! Playbook - Named, versioned automation definition

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Version assigned when the client does not send one
pub const DEFAULT_PLAYBOOK_VERSION: &str = "1.0";

/// A playbook submitted as JSON (or assembled from a multipart upload)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybookUpload {
    pub playbook_name: String,
    /// Opaque playbook content
    pub content: serde_json::Value,
    pub version: String,
    pub tags: Vec<String>,
}

impl PlaybookUpload {
    pub fn new(playbook_name: impl Into<String>, content: serde_json::Value) -> Self {
        Self {
            playbook_name: playbook_name.into(),
            content,
            version: DEFAULT_PLAYBOOK_VERSION.to_string(),
            tags: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.playbook_name.trim().is_empty() {
            return Err(DomainError::invalid_field(
                "playbook_name",
                "must not be empty",
            ));
        }
        if !self.content.is_object() {
            return Err(DomainError::invalid_field(
                "content",
                "must be a JSON object",
            ));
        }
        Ok(())
    }
}

/// Opaque playbook identifier: `pb_<YYYYmmdd_HHMMSS>_<8 hex>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaybookId(String);

impl PlaybookId {
    pub const PREFIX: &'static str = "pb_";

    pub fn generate() -> Self {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self(format!(
            "{}{}_{}",
            Self::PREFIX,
            Utc::now().format("%Y%m%d_%H%M%S"),
            &suffix[..8]
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PlaybookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Summary of an uploaded playbook file
///
/// The file body itself is never stored or parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaybookFile {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub size_bytes: u64,
}

/// Fields collected from a multipart playbook upload, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybookFileUpload {
    pub playbook_name: Option<String>,
    pub version: Option<String>,
    pub tags: Vec<String>,
    pub file: Option<PlaybookFile>,
}

impl PlaybookFileUpload {
    /// Require the file and a playbook name, filling in the default version
    ///
    /// The resulting playbook content is the file summary, never the file body.
    pub fn into_parts(self) -> Result<(PlaybookUpload, PlaybookFile), DomainError> {
        let file = self
            .file
            .ok_or_else(|| DomainError::invalid_field("file", "is required"))?;
        let name = self
            .playbook_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| DomainError::invalid_field("playbook_name", "is required"))?;

        let content = serde_json::json!({ "file": file });
        let playbook = PlaybookUpload::new(name, content)
            .with_version(
                self.version
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_PLAYBOOK_VERSION.to_string()),
            )
            .with_tags(self.tags);

        Ok((playbook, file))
    }
}

/// Split a comma-separated tag list, trimming entries and dropping blanks
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
