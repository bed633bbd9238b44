//! Notification Formatters
//!
//! Transform a Notification into the body a webhook endpoint expects.

mod slack;

pub use slack::format_as_slack_message;

use amplifai::Notification;

/// Format a notification based on the configured format type
///
/// `"json"` posts the notification itself; anything else (or nothing)
/// produces a Slack-compatible message.
pub fn format_notification(format: Option<&str>, notification: &Notification) -> serde_json::Value {
    match format {
        Some("json") => serde_json::to_value(notification).unwrap_or_default(),
        _ => format_as_slack_message(notification),
    }
}
