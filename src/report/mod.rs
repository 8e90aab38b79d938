//! Report templates: data-to-message formatting for the notification
//! families the library ships with.
//!
//! Every function here returns a fully built
//! [`SlackMessage`](crate::SlackMessage) with no channel set; the delivery
//! client (or the caller) supplies the target.

pub mod deployment;
pub mod error_alert;
pub mod financial;
pub mod performance;
pub mod project;
pub mod security;
pub mod severity;
pub mod test_run;

pub use severity::Severity;

/// Timestamp format shared by the report families.
pub(crate) const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

pub(crate) fn now_stamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Renders items as a mrkdwn bullet list, one `• item` per line.
pub(crate) fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "No items to display".to_string();
    }
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Groups the integer part of a non-negative number with thousands
/// separators, e.g. `1234567` becomes `1,234,567`.
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats a dollar amount with grouping and two decimals, e.g.
/// `$1,234,567.89`. Negative amounts render as `-$...`.
pub(crate) fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!(
        "{sign}${}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}
