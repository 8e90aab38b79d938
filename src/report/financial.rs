//! Financial performance, budget and cash-flow reporting.

use crate::message::{ButtonSpec, ButtonStyle, MessageBuilder, SlackMessage};

use super::{bullet_list, format_currency, now_stamp, Severity};

/// Figures for one financial reporting period.
#[derive(Debug, Clone)]
pub struct FinancialSummary {
    pub report_period: String,
    pub total_revenue: f64,
    pub total_expenses: f64,
    /// Profit margin in percent.
    pub profit_margin: f64,
    /// Month-over-month growth in percent.
    pub monthly_growth: f64,
    pub top_performers: Vec<String>,
    pub key_metrics: Vec<String>,
}

/// Budget utilization for one department and category.
#[derive(Debug, Clone)]
pub struct BudgetStatus {
    pub department: String,
    pub category: String,
    pub limit: f64,
    pub current_spend: f64,
    /// Utilization in percent.
    pub utilization: f64,
    pub alert_level: Severity,
}

/// Figures for a quarterly summary.
#[derive(Debug, Clone)]
pub struct QuarterlyFigures {
    pub quarter: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub previous_quarter_revenue: f64,
    pub achievements: Vec<String>,
    pub challenges: Vec<String>,
}

/// Comprehensive financial performance report with an overview table.
pub fn financial_report(summary: &FinancialSummary) -> SlackMessage {
    let timestamp = now_stamp();
    let growth_icon = if summary.monthly_growth > 0.0 { "📈" } else { "📉" };
    let profit_status = profit_status(summary.profit_margin);
    let net_profit = summary.total_revenue - summary.total_expenses;

    let rows = vec![
        vec![
            "Total Revenue".to_string(),
            format_currency(summary.total_revenue),
            "💵 Tracked".to_string(),
        ],
        vec![
            "Total Expenses".to_string(),
            format_currency(summary.total_expenses),
            "💸 Monitored".to_string(),
        ],
        vec![
            "Net Profit".to_string(),
            format_currency(net_profit),
            profit_status.to_string(),
        ],
        vec![
            "Profit Margin".to_string(),
            format!("{:.1}%", summary.profit_margin),
            profit_status.to_string(),
        ],
        vec![
            "Monthly Growth".to_string(),
            format!("{:.1}%", summary.monthly_growth),
            format!(
                "{growth_icon} {}",
                if summary.monthly_growth > 0.0 { "Positive" } else { "Negative" }
            ),
        ],
    ];

    MessageBuilder::new()
        .add_header("💼 Financial Performance Report")
        .add_section(format!(
            "*Report Period:* {}\n*Generated:* {timestamp}",
            summary.report_period
        ))
        .add_divider()
        .add_section("💰 *Financial Overview:*")
        .add_table(&["Metric", "Amount", "Status"], &rows)
        .add_divider()
        .add_section("🏆 *Top Performers:*")
        .add_section(bullet_list(&summary.top_performers))
        .add_divider()
        .add_section("📊 *Key Metrics:*")
        .add_section(bullet_list(&summary.key_metrics))
        .add_context(["💼 Finance Team", "📈 Business Intelligence", "💹 Market Analysis"])
        .add_buttons([
            ButtonSpec::new("Full Dashboard")
                .url("https://finance.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Export Data").url("https://export.example.com"),
            ButtonSpec::new("Schedule Meeting").url("https://meeting.example.com"),
        ])
        .build()
}

/// Celebration notice for a revenue milestone.
pub fn revenue_milestone(
    milestone_type: &str,
    amount: f64,
    period: &str,
    growth_rate: f64,
) -> SlackMessage {
    MessageBuilder::new()
        .add_header("🎉 Revenue Milestone Achieved!")
        .add_section(format!("*Milestone:* {milestone_type}"))
        .add_section(format!("*Amount:* {}", format_currency(amount)))
        .add_section(format!("*Period:* {period}"))
        .add_section(format!("*Growth Rate:* {growth_rate:.1}%"))
        .add_section(format!("*Achieved:* {}", now_stamp()))
        .add_buttons([
            ButtonSpec::new("View Details")
                .url("https://revenue.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Share News").url("https://share.example.com"),
        ])
        .build()
}

/// Budget alert with limit/spend/remaining breakdown.
pub fn budget_alert(status: &BudgetStatus) -> SlackMessage {
    let icon = status.alert_level.icon();
    let remaining = status.limit - status.current_spend;

    let rows = vec![
        vec![
            "Budget Limit".to_string(),
            format_currency(status.limit),
            "🎯 Target".to_string(),
        ],
        vec![
            "Current Spend".to_string(),
            format_currency(status.current_spend),
            "💸 Used".to_string(),
        ],
        vec![
            "Remaining".to_string(),
            format_currency(remaining),
            if remaining > 0.0 { "✅ Available" } else { "🚨 Exceeded" }.to_string(),
        ],
        vec![
            "Utilization".to_string(),
            format!("{:.1}%", status.utilization),
            utilization_status(status.utilization).to_string(),
        ],
    ];

    MessageBuilder::new()
        .add_header(format!("{icon} Budget Alert - {}", status.department))
        .add_section(format!("*Category:* {}", status.category))
        .add_section(format!("*Alert Level:* {icon} {}", status.alert_level))
        .add_divider()
        .add_section("💰 *Budget Status:*")
        .add_table(&["Metric", "Amount", "Status"], &rows)
        .add_section(format!("*Alert Time:* {}", now_stamp()))
        .add_buttons([
            ButtonSpec::new("Review Budget")
                .url("https://budget.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Request Approval").url("https://approval.example.com"),
            ButtonSpec::new("Contact Finance").url("https://finance-team.example.com"),
        ])
        .build()
}

/// Quarterly summary with quarter-over-quarter growth.
pub fn quarterly_summary(figures: &QuarterlyFigures) -> SlackMessage {
    let timestamp = now_stamp();
    let qoq_growth = if figures.previous_quarter_revenue == 0.0 {
        0.0
    } else {
        (figures.revenue - figures.previous_quarter_revenue) / figures.previous_quarter_revenue
            * 100.0
    };
    let growth_icon = if qoq_growth > 0.0 { "📈" } else { "📉" };
    let margin = if figures.revenue == 0.0 {
        0.0
    } else {
        figures.profit / figures.revenue * 100.0
    };

    let rows = vec![
        vec![
            "Revenue".to_string(),
            format_currency(figures.revenue),
            format!("{growth_icon} {qoq_growth:.1}%"),
        ],
        vec![
            "Expenses".to_string(),
            format_currency(figures.expenses),
            "💸 Managed".to_string(),
        ],
        vec![
            "Net Profit".to_string(),
            format_currency(figures.profit),
            profit_status(margin).to_string(),
        ],
    ];

    let mut builder = MessageBuilder::new()
        .add_header(format!("📊 {} Financial Summary", figures.quarter))
        .add_section(format!("*Report Generated:* {timestamp}"))
        .add_divider()
        .add_section("💰 *Quarter Highlights:*")
        .add_table(&["Metric", "Amount", "QoQ Change"], &rows)
        .add_divider();

    if !figures.achievements.is_empty() {
        builder = builder
            .add_section("🏆 *Key Achievements:*")
            .add_section(bullet_list(&figures.achievements))
            .add_divider();
    }

    if !figures.challenges.is_empty() {
        builder = builder
            .add_section("⚠️ *Challenges & Focus Areas:*")
            .add_section(bullet_list(&figures.challenges))
            .add_divider();
    }

    builder
        .add_context([
            "📈 Quarterly Review".to_string(),
            "💼 Executive Summary".to_string(),
            format!("📅 {}", figures.quarter),
        ])
        .add_buttons([
            ButtonSpec::new("Full Report")
                .url("https://quarterly.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Board Presentation").url("https://board.example.com"),
            ButtonSpec::new("Next Quarter Plan").url("https://planning.example.com"),
        ])
        .build()
}

/// Cash position alert.
pub fn cash_flow_alert(
    current_balance: f64,
    projected_cash_flow: f64,
    days_remaining: u32,
    alert_level: Severity,
) -> SlackMessage {
    let icon = alert_level.icon();

    MessageBuilder::new()
        .add_header(format!("{icon} Cash Flow Alert"))
        .add_section(format!("*Alert Type:* {icon} {alert_level}"))
        .add_section(format!("*Current Balance:* {}", format_currency(current_balance)))
        .add_section(format!(
            "*Projected Cash Flow:* {}",
            format_currency(projected_cash_flow)
        ))
        .add_section(format!("*Days of Cash Remaining:* {days_remaining} days"))
        .add_section(format!("*Alert Time:* {}", now_stamp()))
        .add_buttons([
            ButtonSpec::new("View Cash Flow")
                .url("https://cashflow.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Emergency Plan")
                .url("https://emergency.example.com")
                .style(ButtonStyle::Danger),
            ButtonSpec::new("Contact CFO").url("https://cfo.example.com"),
        ])
        .build()
}

fn profit_status(margin: f64) -> &'static str {
    if margin > 20.0 {
        "💰 Excellent"
    } else if margin > 10.0 {
        "✅ Good"
    } else if margin > 0.0 {
        "⚠️ Moderate"
    } else {
        "🚨 Loss"
    }
}

fn utilization_status(utilization: f64) -> &'static str {
    if utilization > 100.0 {
        "🚨 Over Budget"
    } else if utilization > 90.0 {
        "⚠️ High"
    } else if utilization > 75.0 {
        "🔶 Moderate"
    } else {
        "✅ Good"
    }
}
