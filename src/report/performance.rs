//! Service performance and health reporting.

use crate::message::{ButtonSpec, ButtonStyle, MessageBuilder, SlackMessage};

use super::{group_thousands, now_stamp};

/// Metrics captured for one service over one reporting period.
#[derive(Debug, Clone)]
pub struct PerformanceSnapshot {
    pub service_name: String,
    pub avg_response_time_ms: f64,
    pub total_requests: u64,
    /// Error rate in percent.
    pub error_rate: f64,
    /// CPU usage in percent.
    pub cpu_usage: f64,
    /// Memory usage in percent.
    pub memory_usage: f64,
    pub report_period: String,
}

/// Detailed performance report with a metrics table and threshold-derived
/// status labels.
pub fn performance_report(snapshot: &PerformanceSnapshot) -> SlackMessage {
    let rows = vec![
        vec![
            "Average Response Time".to_string(),
            format!("{:.2} ms", snapshot.avg_response_time_ms),
            evaluate_response_time(snapshot.avg_response_time_ms).to_string(),
        ],
        vec![
            "Total Requests".to_string(),
            group_thousands(snapshot.total_requests),
            "📈 Tracked".to_string(),
        ],
        vec![
            "Error Rate".to_string(),
            format!("{:.2}%", snapshot.error_rate),
            evaluate_error_rate(snapshot.error_rate).to_string(),
        ],
        vec![
            "CPU Usage".to_string(),
            format!("{:.1}%", snapshot.cpu_usage),
            evaluate_resource_usage(snapshot.cpu_usage, 70.0, 85.0).to_string(),
        ],
        vec![
            "Memory Usage".to_string(),
            format!("{:.1}%", snapshot.memory_usage),
            evaluate_resource_usage(snapshot.memory_usage, 80.0, 90.0).to_string(),
        ],
    ];

    MessageBuilder::new()
        .add_header(format!("🚀 {} Performance Report", snapshot.service_name))
        .add_section(format!(
            "*Report Period:* {}\n*Generated:* {}",
            snapshot.report_period,
            now_stamp()
        ))
        .add_divider()
        .add_section(format!(
            "*Overall Status:* {}",
            health_status(snapshot.error_rate)
        ))
        .add_section("📊 *Key Metrics:*")
        .add_table(&["Metric", "Value", "Status"], &rows)
        .add_divider()
        .add_context(["📋 Automated Performance Monitoring", "🕐 Next Report: 1 hour"])
        .add_buttons([
            ButtonSpec::new("View Dashboard")
                .url("https://dashboard.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Download Report").url("https://reports.example.com"),
            ButtonSpec::new("Alert Settings").url("https://settings.example.com"),
        ])
        .build()
}

fn health_status(error_rate: f64) -> &'static str {
    if error_rate < 5.0 {
        "✅ HEALTHY"
    } else if error_rate < 15.0 {
        "⚠️ WARNING"
    } else {
        "🚨 CRITICAL"
    }
}

fn evaluate_response_time(response_time_ms: f64) -> &'static str {
    if response_time_ms < 200.0 {
        "✅ Good"
    } else if response_time_ms < 500.0 {
        "⚠️ Fair"
    } else {
        "🚨 Poor"
    }
}

fn evaluate_error_rate(error_rate: f64) -> &'static str {
    if error_rate < 5.0 {
        "✅ Good"
    } else if error_rate < 15.0 {
        "⚠️ Warning"
    } else {
        "🚨 Critical"
    }
}

fn evaluate_resource_usage(usage: f64, warning: f64, critical: f64) -> &'static str {
    if usage < warning {
        "✅ Normal"
    } else if usage < critical {
        "⚠️ High"
    } else {
        "🚨 Critical"
    }
}
