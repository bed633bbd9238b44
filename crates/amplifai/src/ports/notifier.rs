//! Notifier Port
//!
//! Abstract interface for announcing accepted requests to an
//! external channel (chat webhook).

use async_trait::async_trait;

use crate::domain::entities::Notification;
use crate::domain::errors::DomainError;

/// Outbound notification delivery
///
/// Implementations make a single attempt. Callers on the request path
/// never await this directly; they hand it to a detached task and only
/// log the outcome.
///
/// # Example
///
/// ```rust,ignore
/// use amplifai::ports::Notifier;
///
/// struct ChatWebhook { /* reqwest client */ }
///
/// #[async_trait]
/// impl Notifier for ChatWebhook {
///     async fn notify(&self, notification: &Notification) -> Result<(), DomainError> {
///         // POST a formatted message
///     }
/// }
/// ```
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one notification
    ///
    /// Returns `DomainError::ExternalService` on transport failure or
    /// a non-2xx response.
    async fn notify(&self, notification: &Notification) -> Result<(), DomainError>;

    /// Destination shown in diagnostics, with secrets masked
    fn destination(&self) -> String;
}
