//! System error alerts and incident notifications.

use crate::message::{ButtonSpec, ButtonStyle, MessageBuilder, SlackMessage};

use super::{now_stamp, Severity};

/// Full error report with details, occurrence count and severity-driven
/// recommended actions.
pub fn error_report(
    system_name: &str,
    error_type: &str,
    error_message: &str,
    error_count: u32,
    severity: Severity,
    affected_services: &str,
) -> SlackMessage {
    let timestamp = now_stamp();
    let icon = severity.icon();

    MessageBuilder::new()
        .add_header(format!("{icon} System Error Alert - {system_name}"))
        .add_section(format!(
            "*Error Type:* `{error_type}`\n*Severity:* {icon} {severity}"
        ))
        .add_section(format!(
            "*Timestamp:* {timestamp}\n*Error Count:* {error_count} occurrences"
        ))
        .add_divider()
        .add_section("🔍 *Error Details:*")
        .add_section(format!("```{error_message}```"))
        .add_section(format!("*Affected Services:* {affected_services}"))
        .add_divider()
        .add_section("📋 *Recommended Actions:*")
        .add_section(recommended_actions(severity))
        .add_divider()
        .add_context([
            "🔔 Alert System".to_string(),
            "📱 Incident Management".to_string(),
            format!("⏰ {timestamp}"),
        ])
        .add_buttons([
            ButtonSpec::new("View Logs")
                .url("https://logs.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Create Incident")
                .url("https://incident.example.com")
                .style(ButtonStyle::Danger),
            ButtonSpec::new("System Status").url("https://status.example.com"),
        ])
        .build()
}

/// Compact alert for fast notification paths.
pub fn quick_alert(system_name: &str, error_type: &str, severity: Severity) -> SlackMessage {
    let icon = severity.icon();

    MessageBuilder::new()
        .add_header(format!("{icon} Quick Alert - {system_name}"))
        .add_section(format!("*Error:* `{error_type}`"))
        .add_section(format!("*Severity:* {icon} {severity}"))
        .add_section(format!("*Time:* {}", now_stamp()))
        .add_buttons([
            ButtonSpec::new("View Details")
                .url("https://logs.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Acknowledge").url("https://ack.example.com"),
        ])
        .build()
}

fn recommended_actions(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => {
            "• *IMMEDIATE ACTION REQUIRED*\n\
             • Escalate to on-call engineer\n\
             • Check system logs for detailed stack trace\n\
             • Consider emergency rollback\n\
             • Notify stakeholders immediately"
        }
        Severity::High => {
            "• Check system logs for detailed stack trace\n\
             • Verify service dependencies\n\
             • Monitor resource utilization\n\
             • Consider scaling if needed\n\
             • Update incident tracking"
        }
        Severity::Medium => {
            "• Review error patterns and frequency\n\
             • Check recent deployments\n\
             • Monitor for escalation\n\
             • Schedule investigation"
        }
        Severity::Low => {
            "• Log for analysis\n\
             • Monitor for patterns\n\
             • Include in regular maintenance"
        }
    }
}
