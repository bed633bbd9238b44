//! HTTP Webhook Implementation
//!
//! Delivers notifications to a chat webhook endpoint using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use amplifai::{DomainError, Notification, Notifier};

use super::formatters::format_notification;
use crate::config::mask_url;

/// HTTP implementation of Notifier
pub struct HttpWebhook {
    client: Client,
    url: String,
    format: Option<String>,
}

impl HttpWebhook {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                "AmplifAI-Execution-Engine/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| {
                DomainError::ExternalService(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            url: url.into(),
            format: None,
        })
    }

    /// Choose the body format ("slack" or "json")
    pub fn with_format(mut self, format: Option<String>) -> Self {
        self.format = format;
        self
    }
}

#[async_trait]
impl Notifier for HttpWebhook {
    async fn notify(&self, notification: &Notification) -> Result<(), DomainError> {
        let body = format_notification(self.format.as_deref(), notification);

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Webhook request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let response_body = response
            .text()
            .await
            .unwrap_or_else(|_| "No response body".to_string());
        Err(DomainError::ExternalService(format!(
            "Webhook returned {status}: {response_body}"
        )))
    }

    fn destination(&self) -> String {
        mask_url(&self.url)
    }
}
