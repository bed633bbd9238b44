//! Fire-and-forget notification dispatch

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use amplifai::{DomainError, Notification, Notifier};

/// Hands notifications to a detached task with a bounded timeout
///
/// Outcomes are only logged. With no notifier configured every dispatch
/// is a silent no-op.
#[derive(Clone)]
pub struct NotificationDispatcher {
    notifier: Option<Arc<dyn Notifier>>,
    timeout: Duration,
}

impl NotificationDispatcher {
    pub fn new(notifier: Option<Arc<dyn Notifier>>, timeout: Duration) -> Self {
        Self { notifier, timeout }
    }

    pub fn is_configured(&self) -> bool {
        self.notifier.is_some()
    }

    pub fn destination(&self) -> Option<String> {
        self.notifier.as_ref().map(|n| n.destination())
    }

    /// Spawn delivery and return immediately
    pub fn dispatch(&self, notification: Notification) -> Option<JoinHandle<()>> {
        let notifier = self.notifier.clone()?;
        let timeout = self.timeout;

        Some(tokio::spawn(async move {
            let kind = notification.kind;
            match tokio::time::timeout(timeout, notifier.notify(&notification)).await {
                Ok(Ok(())) => tracing::debug!(%kind, "Notification delivered"),
                Ok(Err(e)) => tracing::warn!(%kind, error = %e, "⚠️  Notification failed"),
                Err(_) => tracing::warn!(%kind, ?timeout, "⚠️  Notification timed out"),
            }
        }))
    }

    /// Deliver and wait for the outcome (connectivity checks only)
    pub async fn deliver_now(&self, notification: &Notification) -> Result<(), DomainError> {
        let notifier = self
            .notifier
            .as_ref()
            .ok_or_else(|| DomainError::ExternalService("Notifier not configured".to_string()))?;

        tokio::time::timeout(self.timeout, notifier.notify(notification))
            .await
            .map_err(|_| {
                DomainError::ExternalService(format!(
                    "Notification timed out after {:?}",
                    self.timeout
                ))
            })?
    }
}
