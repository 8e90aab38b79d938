//! Test execution reporting with per-vertical success-rate bars.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::message::{ButtonSpec, ButtonStyle, MessageBuilder, SlackMessage};

const SUCCESS_BLOCK: &str = "🟩";
const FAIL_BLOCK: &str = "🟥";

/// Outcome of a single scenario, keyed by the vertical it belongs to.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub vertical: String,
    pub passed: bool,
}

/// One complete test execution.
#[derive(Debug, Clone)]
pub struct TestRunReport {
    pub tags: String,
    pub environment: String,
    pub browser: String,
    pub duration: Duration,
    pub total_scenarios: u32,
    pub passed_scenarios: u32,
    pub failed_scenarios: u32,
    pub results: Vec<TestResult>,
    pub cucumber_report_url: Option<String>,
    pub allure_report_url: String,
}

/// Comprehensive test report: run context, totals, a per-vertical success
/// chart (verticals sorted by name) and report-link buttons.
pub fn test_report(report: &TestRunReport) -> SlackMessage {
    let execution_date = chrono::Local::now().format("%d-%m-%Y %H:%M").to_string();
    let duration = format_execution_time(report.duration);
    let success_rate = success_rate(report.total_scenarios, report.passed_scenarios);

    let mut builder = MessageBuilder::new()
        .add_header(format!(
            "{} {} TEST RESULTS",
            report.environment.to_uppercase(),
            report.tags
        ))
        .add_context([
            format!("*Env:* {}", report.environment.to_uppercase()),
            format!("*Browser:* {}", report.browser),
            format!("*Date:* {execution_date}"),
            format!("*Duration:* {duration}"),
        ])
        .add_divider()
        .add_section(" *Test Results Summary:*")
        .add_context([format!(
            "• :bar_chart: Total Scenarios: {}\n• :white_check_mark: Passed: {}\n• :x: Failed: {}\n• :chart_with_upwards_trend: Success Rate: {success_rate}%",
            report.total_scenarios, report.passed_scenarios, report.failed_scenarios
        )])
        .add_divider()
        .add_header("🏢 Verticals Success Rate Chart");

    for (vertical, tally) in vertical_tallies(&report.results) {
        builder = builder.add_section(format!("`{}`", vertical_result_line(&vertical, tally)));
    }

    builder = builder.add_divider();

    let allure = ButtonSpec::new("✨ Allure Report")
        .url(report.allure_report_url.clone())
        .style(ButtonStyle::Primary);
    let buttons = match &report.cucumber_report_url {
        Some(cucumber_url) if !cucumber_url.is_empty() => vec![
            ButtonSpec::new("🥒 Cucumber Report")
                .url(cucumber_url.clone())
                .style(ButtonStyle::Primary),
            allure,
        ],
        _ => vec![allure],
    };

    builder.add_buttons(buttons).build()
}

/// Compact pass/fail summary without the vertical chart.
pub fn quick_summary(
    tags: &str,
    environment: &str,
    total_scenarios: u32,
    passed_scenarios: u32,
    failed_scenarios: u32,
    duration: &str,
) -> SlackMessage {
    let success_rate = success_rate(total_scenarios, passed_scenarios);
    let execution_date = chrono::Local::now().format("%d-%m-%Y %H:%M").to_string();
    let (status, icon) = if failed_scenarios == 0 {
        ("✅ ALL TESTS PASSED", "🎉")
    } else {
        ("⚠️ SOME TESTS FAILED", "⚠️")
    };

    MessageBuilder::new()
        .add_header(format!("{icon} Test Execution Complete"))
        .add_section(format!("*Environment:* {}", environment.to_uppercase()))
        .add_section(format!("*Tags:* {tags}"))
        .add_section(format!("*Status:* {status}"))
        .add_section(format!(
            "*Results:* {passed_scenarios}/{total_scenarios} ({success_rate}%)"
        ))
        .add_section(format!("*Duration:* {duration}"))
        .add_section(format!("*Completed:* {execution_date}"))
        .build()
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    passed: u32,
    failed: u32,
}

fn vertical_tallies(results: &[TestResult]) -> BTreeMap<String, Tally> {
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    for result in results {
        let tally = tallies.entry(result.vertical.clone()).or_default();
        if result.passed {
            tally.passed += 1;
        } else {
            tally.failed += 1;
        }
    }
    tallies
}

fn vertical_result_line(vertical: &str, tally: Tally) -> String {
    let total = tally.passed + tally.failed;
    let rate = if total == 0 {
        0.0
    } else {
        f64::from(tally.passed) / f64::from(total)
    };
    let percent = (rate * 100.0).round() as u32;
    let passed_blocks = (rate * 10.0).round() as usize;

    let bar = format!(
        "{}{}",
        SUCCESS_BLOCK.repeat(passed_blocks.min(10)),
        FAIL_BLOCK.repeat(10usize.saturating_sub(passed_blocks))
    );

    format!(
        "{:<10} │ {bar} {}/{total} ({percent}%)",
        vertical.to_uppercase(),
        tally.passed
    )
}

fn success_rate(total: u32, passed: u32) -> String {
    if total == 0 {
        return "0".to_string();
    }
    format!("{:.1}", f64::from(passed) / f64::from(total) * 100.0)
}

fn format_execution_time(duration: Duration) -> String {
    let seconds = duration.as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{hours}h {}m {}s", minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{minutes}m {}s", seconds % 60)
    } else {
        format!("{seconds}s")
    }
}
