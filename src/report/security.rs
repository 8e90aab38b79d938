//! Security scan results, vulnerability alerts and compliance reporting.

use crate::message::{ButtonSpec, ButtonStyle, MessageBuilder, SlackMessage};

use super::{bullet_list, now_stamp};

/// Aggregated outcome of one security scan.
#[derive(Debug, Clone)]
pub struct AuditSummary {
    pub systems_scanned: u32,
    pub vulnerabilities_found: u32,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub affected_systems: Vec<String>,
    pub scan_duration: String,
}

/// Outcome of a compliance assessment against one framework.
#[derive(Debug, Clone)]
pub struct ComplianceSummary {
    pub framework: String,
    pub total_controls: u32,
    pub passed: u32,
    pub failed: u32,
    pub not_applicable: u32,
    /// Compliance score in percent.
    pub score: f64,
}

/// Full audit report: severity counts, affected systems and recommended
/// actions.
pub fn audit_report(summary: &AuditSummary) -> SlackMessage {
    let timestamp = now_stamp();
    let rows = vec![
        severity_row("🚨 Critical", summary.critical, "Immediate"),
        severity_row("⚠️ High", summary.high, "Within 24h"),
        severity_row("🔶 Medium", summary.medium, "Within 1 week"),
        severity_row("ℹ️ Low", summary.low, "Next cycle"),
    ];

    MessageBuilder::new()
        .add_header("🔒 Security Audit Report")
        .add_section(format!(
            "*Scan Completed:* {timestamp}\n*Duration:* {}",
            summary.scan_duration
        ))
        .add_section(format!(
            "*Systems Scanned:* {}\n*Vulnerabilities Found:* {}\n*Overall Risk Level:* {}",
            summary.systems_scanned,
            summary.vulnerabilities_found,
            overall_risk(summary)
        ))
        .add_divider()
        .add_section("🛡️ *Vulnerability Summary:*")
        .add_table(&["Severity", "Count", "Action Required"], &rows)
        .add_divider()
        .add_section("🎯 *Affected Systems:*")
        .add_section(affected_systems_text(&summary.affected_systems))
        .add_divider()
        .add_section("📋 *Recommended Actions:*")
        .add_section(recommended_actions(summary.critical, summary.high))
        .add_context(["🔍 Security Team", "🛡️ Automated Scanning", "📊 Compliance Report"])
        .add_buttons([
            ButtonSpec::new("View Details")
                .url("https://security.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Download Report").url("https://reports.example.com"),
            ButtonSpec::new("Schedule Review").url("https://calendar.example.com"),
        ])
        .build()
}

/// Urgent single-vulnerability alert.
pub fn critical_vulnerability_alert(
    system_name: &str,
    vulnerability_type: &str,
    cve_id: &str,
    description: &str,
    recommended_action: &str,
) -> SlackMessage {
    MessageBuilder::new()
        .add_header("🚨 CRITICAL VULNERABILITY DETECTED")
        .add_section(format!("*System:* {system_name}"))
        .add_section(format!("*Vulnerability:* {vulnerability_type}"))
        .add_section(format!("*CVE ID:* `{cve_id}`"))
        .add_section(format!("*Description:* {description}"))
        .add_section(format!("*Detected:* {}", now_stamp()))
        .add_divider()
        .add_section("⚡ *IMMEDIATE ACTION REQUIRED:*")
        .add_section(recommended_action)
        .add_buttons([
            ButtonSpec::new("Patch Now")
                .url("https://patch.example.com")
                .style(ButtonStyle::Danger),
            ButtonSpec::new("View Details")
                .url("https://vuln.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Create Incident").url("https://incident.example.com"),
        ])
        .build()
}

/// Compliance status report with a per-status control table.
pub fn compliance_report(summary: &ComplianceSummary) -> SlackMessage {
    let timestamp = now_stamp();
    let status = if summary.score >= 95.0 {
        "✅ COMPLIANT"
    } else if summary.score >= 80.0 {
        "⚠️ PARTIAL"
    } else {
        "🚨 NON-COMPLIANT"
    };

    let rows = vec![
        control_row("✅ Passed", summary.passed, summary.total_controls),
        control_row("❌ Failed", summary.failed, summary.total_controls),
        control_row("➖ N/A", summary.not_applicable, summary.total_controls),
    ];

    MessageBuilder::new()
        .add_header(format!("📋 {} Compliance Report", summary.framework))
        .add_section(format!("*Assessment Date:* {timestamp}"))
        .add_section(format!("*Compliance Score:* {:.1}%", summary.score))
        .add_section(format!("*Status:* {status}"))
        .add_divider()
        .add_section("📊 *Control Summary:*")
        .add_table(&["Status", "Count", "Percentage"], &rows)
        .add_divider()
        .add_context([
            "🏛️ Compliance Team".to_string(),
            format!("📋 {}", summary.framework),
            format!("📅 {timestamp}"),
        ])
        .add_buttons([
            ButtonSpec::new("Full Report")
                .url("https://compliance.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Remediation Plan").url("https://remediation.example.com"),
            ButtonSpec::new("Audit Trail").url("https://audit.example.com"),
        ])
        .build()
}

/// Announces a scan that just started.
pub fn scan_started_notification(
    scan_type: &str,
    system_count: u32,
    estimated_duration: &str,
) -> SlackMessage {
    MessageBuilder::new()
        .add_header("🔍 Security Scan Started")
        .add_section(format!("*Scan Type:* {scan_type}"))
        .add_section(format!("*Systems:* {system_count}"))
        .add_section(format!("*Started:* {}", now_stamp()))
        .add_section(format!("*Estimated Duration:* {estimated_duration}"))
        .add_buttons([
            ButtonSpec::new("Monitor Progress")
                .url("https://scan.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Cancel Scan").url("https://cancel-scan.example.com"),
        ])
        .build()
}

fn severity_row(label: &str, count: u32, timeframe: &str) -> Vec<String> {
    let action = if count > 0 { timeframe } else { "None" };
    vec![label.to_string(), count.to_string(), action.to_string()]
}

fn control_row(label: &str, count: u32, total: u32) -> Vec<String> {
    let percentage = if total == 0 {
        0.0
    } else {
        f64::from(count) * 100.0 / f64::from(total)
    };
    vec![
        label.to_string(),
        count.to_string(),
        format!("{percentage:.1}%"),
    ]
}

fn overall_risk(summary: &AuditSummary) -> &'static str {
    if summary.critical > 0 {
        "🚨 CRITICAL"
    } else if summary.high > 0 {
        "⚠️ HIGH"
    } else if summary.medium > 5 {
        "🔶 MEDIUM"
    } else {
        "✅ LOW"
    }
}

fn affected_systems_text(systems: &[String]) -> String {
    if systems.is_empty() {
        "No systems affected".to_string()
    } else {
        bullet_list(systems)
    }
}

fn recommended_actions(critical: u32, high: u32) -> String {
    let mut actions = Vec::new();

    if critical > 0 {
        actions.push("• *CRITICAL*: Immediate patch deployment required");
        actions.push("• Isolate affected systems if necessary");
        actions.push("• Notify security incident response team");
    }
    if high > 0 {
        actions.push("• Review and prioritize high severity vulnerabilities");
        actions.push("• Schedule emergency patching within 24 hours");
    }
    actions.push("• Conduct penetration testing on affected systems");
    actions.push("• Update security policies and procedures");
    actions.push("• Schedule regular security training for team");

    actions.join("\n")
}
