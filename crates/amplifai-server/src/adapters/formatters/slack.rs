//! Slack incoming-webhook message format

use amplifai::{Notification, NotificationKind};
use serde_json::Value;

const USERNAME: &str = "AmplifAI Bot";

/// Render a notification as `{text, username, icon_emoji}`
pub fn format_as_slack_message(notification: &Notification) -> Value {
    let time = notification.timestamp.format("%Y-%m-%d %H:%M:%S UTC");
    let detail = &notification.detail;

    let (emoji, text) = match notification.kind {
        NotificationKind::CampaignLaunched => (
            ":rocket:",
            format!(
                "🚀 {}\n💰 Budget: ${}\n🎯 Audience: {}\n🎨 Creatives: {}\n📅 Time: {}",
                notification.summary,
                format_usd(detail["budget"].as_f64().unwrap_or_default()),
                join_list(&detail["audience"]),
                join_list(&detail["creatives"]),
                time
            ),
        ),
        NotificationKind::PlaybookUploaded => (
            ":books:",
            format!(
                "📚 {}\n🆔 ID: {}\n🏷️ Version: {}\n📅 Time: {}",
                notification.summary,
                detail["playbook_id"].as_str().unwrap_or("unknown"),
                detail["version"].as_str().unwrap_or("unknown"),
                time
            ),
        ),
        NotificationKind::Error => {
            let mut text = format!("🚨 {}\n📅 Time: {}", notification.summary, time);
            let details = &detail["details"];
            if !is_empty(details) {
                let pretty = serde_json::to_string_pretty(details).unwrap_or_default();
                text.push_str(&format!("\n📄 Details: {pretty}"));
            }
            (":warning:", text)
        }
        NotificationKind::Test => (
            ":test_tube:",
            format!("🧪 {}\n📅 Time: {}", notification.summary, time),
        ),
    };

    serde_json::json!({
        "text": text,
        "username": USERNAME,
        "icon_emoji": emoji,
    })
}

/// Two decimals with thousands separators: `15000.5` -> `"15,000.50"`
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}

fn join_list(value: &Value) -> String {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
