use std::time::Duration;

use slack_reporter::message::Block;
use slack_reporter::report::deployment::{self, DeploymentOutcome};
use slack_reporter::report::error_alert;
use slack_reporter::report::financial::{self, BudgetStatus};
use slack_reporter::report::performance::{self, PerformanceSnapshot};
use slack_reporter::report::project::{self, ProjectStatus};
use slack_reporter::report::security::{self, AuditSummary};
use slack_reporter::report::test_run::{self, TestResult, TestRunReport};
use slack_reporter::report::Severity;
use slack_reporter::SlackMessage;

/// Structural tests for the report templates: block shapes, severity
/// icons and table layouts. Timestamps are generated at build time, so
/// assertions target structure and stable text, never exact dates.

fn header_text(message: &SlackMessage) -> String {
    let value = serde_json::to_value(message).expect("message should serialize");
    value["blocks"][0]["text"]["text"]
        .as_str()
        .expect("first block should be a header")
        .to_string()
}

fn rendered(message: &SlackMessage) -> String {
    serde_json::to_string(message).expect("message should serialize")
}

#[test]
fn test_severity_lookup_is_shared_and_parseable() {
    assert_eq!(Severity::Critical.icon(), "🚨");
    assert_eq!(Severity::High.icon(), "⚠️");
    assert_eq!(Severity::Medium.icon(), "🔶");
    assert_eq!(Severity::Low.icon(), "ℹ️");

    let parsed: Severity = "critical".parse().expect("case-insensitive parse");
    assert_eq!(parsed, Severity::Critical);
    assert!(
        "catastrophic".parse::<Severity>().is_err(),
        "unknown severities should be rejected at the boundary"
    );
}

#[test]
fn test_error_report_reflects_severity() {
    let message = error_alert::error_report(
        "payments-api",
        "NullPointerException",
        "at PaymentService.charge(PaymentService.java:42)",
        17,
        Severity::Critical,
        "payments, checkout",
    );

    let text = rendered(&message);
    assert!(
        header_text(&message).contains("🚨 System Error Alert - payments-api"),
        "header should carry the severity icon and system name"
    );
    assert!(text.contains("IMMEDIATE ACTION REQUIRED"));
    assert!(
        text.contains("```at PaymentService.charge(PaymentService.java:42)```"),
        "error details should be fenced as code"
    );
    assert!(text.contains("17 occurrences"));
}

#[test]
fn test_quick_alert_is_compact() {
    let message = error_alert::quick_alert("cache", "Evicted", Severity::Low);

    // Header, three sections, one actions block.
    assert_eq!(message.blocks.len(), 5);
    assert!(matches!(message.blocks[4], Block::Actions { .. }));
}

#[test]
fn test_deployment_report_buttons_follow_outcome() {
    let failed = deployment::deployment_report(&DeploymentOutcome {
        application: "atlas".into(),
        version: "2.4.1".into(),
        environment: "production".into(),
        success: false,
        duration: "4m 12s".into(),
        deployed_services: vec!["api".into(), "worker".into()],
        changes: vec![],
    });

    let text = rendered(&failed);
    assert!(header_text(&failed).contains("💥"));
    assert!(text.contains("Rollback"), "failed deploys should offer rollback");
    assert!(text.contains("View Logs"));
    assert!(
        !text.contains("Release Notes"),
        "success-only buttons should not appear on failure"
    );
    assert!(text.contains("PRODUCTION"), "environment renders uppercased");
    assert!(text.contains("• api"), "deployed services render as bullets");

    let succeeded = deployment::deployment_report(&DeploymentOutcome {
        application: "atlas".into(),
        version: "2.4.2".into(),
        environment: "production".into(),
        success: true,
        duration: "3m 58s".into(),
        deployed_services: vec![],
        changes: vec![],
    });
    assert!(header_text(&succeeded).contains("🚀"));
    assert!(rendered(&succeeded).contains("Release Notes"));
}

#[test]
fn test_performance_report_table_shape() {
    let message = performance::performance_report(&PerformanceSnapshot {
        service_name: "search".into(),
        avg_response_time_ms: 143.5,
        total_requests: 1_234_567,
        error_rate: 2.1,
        cpu_usage: 61.0,
        memory_usage: 92.5,
        report_period: "Last 24 hours".into(),
    });

    let text = rendered(&message);
    assert!(text.contains("*Overall Status:* ✅ HEALTHY"));
    assert!(text.contains("1,234,567"), "request counts render grouped");
    assert!(text.contains("143.50 ms"));
    assert!(
        text.contains("🚨 Critical"),
        "memory above the critical threshold should be flagged"
    );

    // 5 metric rows -> header pair plus five row pairs of section/divider.
    let table_blocks = message
        .blocks
        .iter()
        .filter(|block| {
            matches!(block, Block::Section { fields: Some(_), .. }) || matches!(block, Block::Divider)
        })
        .count();
    assert!(table_blocks >= 12, "metrics table should expand to 12 blocks");
}

#[test]
fn test_security_audit_report_counts_and_risk() {
    let message = security::audit_report(&AuditSummary {
        systems_scanned: 42,
        vulnerabilities_found: 7,
        critical: 1,
        high: 2,
        medium: 3,
        low: 1,
        affected_systems: vec!["auth-service".into(), "gateway".into()],
        scan_duration: "18m".into(),
    });

    let text = rendered(&message);
    assert!(text.contains("*Overall Risk Level:* 🚨 CRITICAL"));
    assert!(text.contains("Immediate"), "critical findings demand immediate action");
    assert!(text.contains("• auth-service"));
    assert!(text.contains("Isolate affected systems if necessary"));
}

#[test]
fn test_security_audit_empty_systems_fallback() {
    let message = security::audit_report(&AuditSummary {
        systems_scanned: 10,
        vulnerabilities_found: 0,
        critical: 0,
        high: 0,
        medium: 0,
        low: 0,
        affected_systems: vec![],
        scan_duration: "5m".into(),
    });

    let text = rendered(&message);
    assert!(text.contains("No systems affected"));
    assert!(text.contains("*Overall Risk Level:* ✅ LOW"));
}

#[test]
fn test_budget_alert_flags_overrun() {
    let message = financial::budget_alert(&BudgetStatus {
        department: "Engineering".into(),
        category: "Cloud".into(),
        limit: 10_000.0,
        current_spend: 12_500.5,
        utilization: 125.0,
        alert_level: Severity::High,
    });

    let text = rendered(&message);
    assert!(header_text(&message).contains("⚠️ Budget Alert - Engineering"));
    assert!(text.contains("$10,000.00"));
    assert!(text.contains("$12,500.50"));
    assert!(text.contains("🚨 Exceeded"), "negative remainder should read as exceeded");
    assert!(text.contains("🚨 Over Budget"));
    assert!(text.contains("-$2,500.50"), "remaining budget renders signed");
}

#[test]
fn test_project_status_progress_bar() {
    let message = project::status_report(&ProjectStatus {
        project_name: "Migration".into(),
        project_manager: "Jordan".into(),
        completion_percentage: 72,
        current_phase: "Rollout".into(),
        completed_tasks: vec!["Schema freeze".into()],
        upcoming_tasks: vec!["Cutover".into()],
        blockers: vec![],
        next_milestone: "Cutover rehearsal".into(),
    });

    let text = rendered(&message);
    assert!(header_text(&message).contains("🚀"), "70-89% maps to the rocket icon");
    assert!(
        text.contains("███████░░░ 72%"),
        "progress bar should fill one block per 10%"
    );
    assert!(
        !text.contains("Current Blockers"),
        "empty blocker lists should omit the blockers section"
    );
}

#[test]
fn test_test_report_vertical_chart_sorted_and_aggregated() {
    let message = test_run::test_report(&TestRunReport {
        tags: "@smoke".into(),
        environment: "staging".into(),
        browser: "chrome".into(),
        duration: Duration::from_secs(95),
        total_scenarios: 4,
        passed_scenarios: 3,
        failed_scenarios: 1,
        results: vec![
            TestResult { vertical: "checkout".into(), passed: true },
            TestResult { vertical: "auth".into(), passed: true },
            TestResult { vertical: "checkout".into(), passed: false },
            TestResult { vertical: "auth".into(), passed: true },
        ],
        cucumber_report_url: Some("https://reports.example.com/cucumber".into()),
        allure_report_url: "https://reports.example.com/allure".into(),
    });

    let text = rendered(&message);
    assert!(header_text(&message).contains("STAGING @smoke TEST RESULTS"));
    assert!(text.contains("1m 35s"), "duration renders as minutes and seconds");
    assert!(text.contains("Success Rate: 75.0%"));

    let auth_pos = text.find("AUTH").expect("auth vertical should appear");
    let checkout_pos = text.find("CHECKOUT").expect("checkout vertical should appear");
    assert!(
        auth_pos < checkout_pos,
        "verticals should be sorted by name"
    );
    assert!(
        text.contains("2/2 (100%)"),
        "auth aggregates both of its passing scenarios"
    );
    assert!(text.contains("1/2 (50%)"), "checkout aggregates pass and fail");
    assert!(text.contains("🥒 Cucumber Report"));
}

#[test]
fn test_test_report_without_cucumber_url_has_single_button() {
    let message = test_run::test_report(&TestRunReport {
        tags: "@regression".into(),
        environment: "prod".into(),
        browser: "firefox".into(),
        duration: Duration::from_secs(3700),
        total_scenarios: 1,
        passed_scenarios: 1,
        failed_scenarios: 0,
        results: vec![TestResult { vertical: "core".into(), passed: true }],
        cucumber_report_url: None,
        allure_report_url: "https://reports.example.com/allure".into(),
    });

    let text = rendered(&message);
    assert!(!text.contains("Cucumber"));
    assert!(text.contains("✨ Allure Report"));
    assert!(text.contains("1h 1m 40s"), "hour-scale durations include hours");
}

#[test]
fn test_quick_summary_all_passed() {
    let message = test_run::quick_summary("@smoke", "staging", 10, 10, 0, "2m 5s");

    let text = rendered(&message);
    assert!(header_text(&message).contains("🎉"));
    assert!(text.contains("✅ ALL TESTS PASSED"));
    assert!(text.contains("10/10 (100.0%)"));
}
