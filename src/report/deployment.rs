//! Deployment notifications: full reports, quick status updates and
//! rollbacks.

use crate::message::{ButtonSpec, ButtonStyle, MessageBuilder, SlackMessage};

use super::{bullet_list, now_stamp};

/// Result of one deployment run.
#[derive(Debug, Clone)]
pub struct DeploymentOutcome {
    pub application: String,
    pub version: String,
    pub environment: String,
    pub success: bool,
    pub duration: String,
    pub deployed_services: Vec<String>,
    pub changes: Vec<String>,
}

fn status_line(success: bool) -> &'static str {
    if success {
        "✅ SUCCESS"
    } else {
        "❌ FAILED"
    }
}

fn status_icon(success: bool) -> &'static str {
    if success {
        "🚀"
    } else {
        "💥"
    }
}

/// Detailed deployment report with services, changes and follow-up links.
pub fn deployment_report(outcome: &DeploymentOutcome) -> SlackMessage {
    let timestamp = now_stamp();

    let mut builder = MessageBuilder::new()
        .add_header(format!(
            "{} Deployment Report - {}",
            status_icon(outcome.success),
            outcome.application
        ))
        .add_section(format!(
            "*Version:* `{}`\n*Environment:* {}",
            outcome.version,
            outcome.environment.to_uppercase()
        ))
        .add_section(format!(
            "*Status:* {}\n*Duration:* {}",
            status_line(outcome.success),
            outcome.duration
        ))
        .add_section(format!("*Completed:* {timestamp}"))
        .add_divider();

    if !outcome.deployed_services.is_empty() {
        builder = builder
            .add_section("📦 *Deployed Services:*")
            .add_section(bullet_list(&outcome.deployed_services))
            .add_divider();
    }

    if !outcome.changes.is_empty() {
        builder = builder
            .add_section("📝 *Changes Included:*")
            .add_section(bullet_list(&outcome.changes))
            .add_divider();
    }

    builder = builder.add_context([
        "🔄 CI/CD Pipeline".to_string(),
        "🛠️ DevOps Team".to_string(),
        format!("📅 {timestamp}"),
    ]);

    let buttons = if outcome.success {
        vec![
            ButtonSpec::new("View Application")
                .url("https://app.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Release Notes").url("https://releases.example.com"),
            ButtonSpec::new("Monitoring").url("https://monitoring.example.com"),
        ]
    } else {
        vec![
            ButtonSpec::new("View Logs")
                .url("https://deployment-logs.example.com")
                .style(ButtonStyle::Danger),
            ButtonSpec::new("Rollback")
                .url("https://rollback.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Contact DevOps").url("https://devops-support.example.com"),
        ]
    };

    builder.add_buttons(buttons).build()
}

/// One-screen deployment status for quick updates.
pub fn simple_notification(
    application: &str,
    version: &str,
    environment: &str,
    success: bool,
) -> SlackMessage {
    MessageBuilder::new()
        .add_header(format!(
            "{} Deployment {}",
            status_icon(success),
            if success { "Completed" } else { "Failed" }
        ))
        .add_section(format!("*Application:* {application}"))
        .add_section(format!("*Version:* `{version}`"))
        .add_section(format!("*Environment:* {}", environment.to_uppercase()))
        .add_section(format!("*Status:* {}", status_line(success)))
        .add_section(format!("*Time:* {}", now_stamp()))
        .build()
}

/// Announces a deployment that just started.
pub fn started_notification(
    application: &str,
    version: &str,
    environment: &str,
    estimated_duration: &str,
) -> SlackMessage {
    MessageBuilder::new()
        .add_header(format!("🔄 Deployment Started - {application}"))
        .add_section(format!("*Version:* `{version}`"))
        .add_section(format!("*Environment:* {}", environment.to_uppercase()))
        .add_section(format!("*Started:* {}", now_stamp()))
        .add_section(format!("*Estimated Duration:* {estimated_duration}"))
        .add_buttons([
            ButtonSpec::new("View Progress")
                .url("https://deployment.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Cancel Deployment")
                .url("https://cancel.example.com")
                .style(ButtonStyle::Danger),
        ])
        .build()
}

/// Reports a rollback between two versions.
pub fn rollback_notification(
    application: &str,
    from_version: &str,
    to_version: &str,
    environment: &str,
    success: bool,
    reason: &str,
) -> SlackMessage {
    let icon = if success { "↩️" } else { "⚠️" };

    MessageBuilder::new()
        .add_header(format!(
            "{icon} Rollback {}",
            if success { "Completed" } else { "Failed" }
        ))
        .add_section(format!("*Application:* {application}"))
        .add_section(format!("*Environment:* {}", environment.to_uppercase()))
        .add_section(format!("*From Version:* `{from_version}`"))
        .add_section(format!("*To Version:* `{to_version}`"))
        .add_section(format!("*Status:* {}", status_line(success)))
        .add_section(format!("*Reason:* {reason}"))
        .add_section(format!("*Completed:* {}", now_stamp()))
        .add_buttons([
            ButtonSpec::new("View Application")
                .url("https://app.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Incident Report").url("https://incident.example.com"),
        ])
        .build()
}
