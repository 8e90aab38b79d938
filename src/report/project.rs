//! Project status, milestone, risk, sprint and resource reporting.

use crate::message::{ButtonSpec, ButtonStyle, MessageBuilder, SlackMessage};

use super::{bullet_list, now_stamp, Severity};

/// State of one project at reporting time.
#[derive(Debug, Clone)]
pub struct ProjectStatus {
    pub project_name: String,
    pub project_manager: String,
    /// Completion in percent, 0-100.
    pub completion_percentage: u32,
    pub current_phase: String,
    pub completed_tasks: Vec<String>,
    pub upcoming_tasks: Vec<String>,
    pub blockers: Vec<String>,
    pub next_milestone: String,
}

/// An identified project risk.
#[derive(Debug, Clone)]
pub struct RiskAlert {
    pub project_name: String,
    pub description: String,
    pub level: Severity,
    pub impact: String,
    pub mitigation_actions: Vec<String>,
    pub owner: String,
}

/// Figures for one completed sprint.
#[derive(Debug, Clone)]
pub struct SprintFigures {
    pub project_name: String,
    pub sprint_number: String,
    pub story_points_completed: u32,
    pub story_points_planned: u32,
    pub tasks_completed: u32,
    pub tasks_carried_over: u32,
    pub sprint_goals: Vec<String>,
    pub retrospective_items: Vec<String>,
}

/// A resource allocation request.
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    pub project_name: String,
    pub resource_type: String,
    pub current_allocation: String,
    pub required_allocation: String,
    pub impact_description: String,
    pub requested_by: String,
}

/// Full status report with progress bar, task lists and blockers.
pub fn status_report(status: &ProjectStatus) -> SlackMessage {
    let timestamp = now_stamp();
    let progress_bar = progress_bar(status.completion_percentage);
    let icon = completion_icon(status.completion_percentage);

    let mut builder = MessageBuilder::new()
        .add_header(format!("{icon} Project Status - {}", status.project_name))
        .add_section(format!(
            "*Project Manager:* {}\n*Current Phase:* {}",
            status.project_manager, status.current_phase
        ))
        .add_section(format!(
            "*Progress:* {progress_bar} {}%",
            status.completion_percentage
        ))
        .add_section(format!("*Last Updated:* {timestamp}"))
        .add_divider()
        .add_section("✅ *Completed Tasks:*")
        .add_section(bullet_list(&status.completed_tasks))
        .add_divider()
        .add_section("🔄 *Upcoming Tasks:*")
        .add_section(bullet_list(&status.upcoming_tasks))
        .add_divider();

    if !status.blockers.is_empty() {
        builder = builder
            .add_section("🚫 *Current Blockers:*")
            .add_section(bullet_list(&status.blockers))
            .add_divider();
    }

    builder
        .add_section(format!("🎯 *Next Milestone:* {}", status.next_milestone))
        .add_context([
            "📋 Project Management".to_string(),
            "👥 Team Collaboration".to_string(),
            format!("📅 {timestamp}"),
        ])
        .add_buttons([
            ButtonSpec::new("Project Board")
                .url("https://project.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Timeline").url("https://timeline.example.com"),
            ButtonSpec::new("Team Chat").url("https://chat.example.com"),
        ])
        .build()
}

/// Milestone achievement notification.
pub fn milestone_notification(
    project_name: &str,
    milestone_name: &str,
    completion_date: &str,
    deliverables: &[String],
    next_milestone: &str,
) -> SlackMessage {
    let mut builder = MessageBuilder::new()
        .add_header(format!("🎉 Milestone Achieved - {project_name}"))
        .add_section(format!("*Milestone:* {milestone_name}"))
        .add_section(format!("*Completed:* {completion_date}"))
        .add_section(format!("*Reported:* {}", now_stamp()))
        .add_divider();

    if !deliverables.is_empty() {
        builder = builder
            .add_section("📦 *Deliverables Completed:*")
            .add_section(bullet_list(deliverables))
            .add_divider();
    }

    builder
        .add_section(format!("🎯 *Next Milestone:* {next_milestone}"))
        .add_buttons([
            ButtonSpec::new("View Details")
                .url("https://milestone.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Celebrate").url("https://celebrate.example.com"),
            ButtonSpec::new("Next Steps").url("https://nextsteps.example.com"),
        ])
        .build()
}

/// Project risk alert with mitigation actions.
pub fn risk_alert(alert: &RiskAlert) -> SlackMessage {
    let icon = alert.level.icon();

    MessageBuilder::new()
        .add_header(format!("{icon} Project Risk Alert - {}", alert.project_name))
        .add_section(format!("*Risk Level:* {icon} {}", alert.level))
        .add_section(format!("*Impact:* {}", alert.impact))
        .add_section(format!("*Owner:* {}", alert.owner))
        .add_section(format!("*Identified:* {}", now_stamp()))
        .add_divider()
        .add_section("⚠️ *Risk Description:*")
        .add_section(alert.description.clone())
        .add_divider()
        .add_section("🛡️ *Mitigation Actions:*")
        .add_section(bullet_list(&alert.mitigation_actions))
        .add_buttons([
            ButtonSpec::new("Risk Register")
                .url("https://risk.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Escalate")
                .url("https://escalate.example.com")
                .style(ButtonStyle::Danger),
            ButtonSpec::new("Contact PM").url("https://pm.example.com"),
        ])
        .build()
}

/// Sprint summary with velocity metrics table.
pub fn sprint_summary(figures: &SprintFigures) -> SlackMessage {
    let completion_rate = if figures.story_points_planned == 0 {
        0.0
    } else {
        f64::from(figures.story_points_completed) * 100.0
            / f64::from(figures.story_points_planned)
    };
    let velocity_icon = if completion_rate >= 90.0 {
        "🚀"
    } else if completion_rate >= 70.0 {
        "⚡"
    } else {
        "🔄"
    };
    let completion_status = if completion_rate >= 90.0 {
        "✅ Excellent".to_string()
    } else if completion_rate >= 70.0 {
        "⚠️ Good".to_string()
    } else {
        "🔶 Needs Focus".to_string()
    };
    let carried_status = if figures.tasks_carried_over == 0 {
        "✅ None".to_string()
    } else {
        format!("⚠️ {}", figures.tasks_carried_over)
    };

    let rows = vec![
        vec![
            "Story Points Completed".to_string(),
            figures.story_points_completed.to_string(),
            format!("{velocity_icon} Tracked"),
        ],
        vec![
            "Story Points Planned".to_string(),
            figures.story_points_planned.to_string(),
            "🎯 Target".to_string(),
        ],
        vec![
            "Completion Rate".to_string(),
            format!("{completion_rate:.1}%"),
            completion_status,
        ],
        vec![
            "Tasks Completed".to_string(),
            figures.tasks_completed.to_string(),
            "✅ Done".to_string(),
        ],
        vec![
            "Tasks Carried Over".to_string(),
            figures.tasks_carried_over.to_string(),
            carried_status,
        ],
    ];

    let mut builder = MessageBuilder::new()
        .add_header(format!(
            "{velocity_icon} Sprint {} Summary - {}",
            figures.sprint_number, figures.project_name
        ))
        .add_section(format!("*Sprint Completed:* {}", now_stamp()))
        .add_divider()
        .add_section("📊 *Sprint Metrics:*")
        .add_table(&["Metric", "Value", "Status"], &rows)
        .add_divider();

    if !figures.sprint_goals.is_empty() {
        builder = builder
            .add_section("🎯 *Sprint Goals Achievement:*")
            .add_section(bullet_list(&figures.sprint_goals))
            .add_divider();
    }

    if !figures.retrospective_items.is_empty() {
        builder = builder
            .add_section("🔄 *Key Retrospective Items:*")
            .add_section(bullet_list(&figures.retrospective_items))
            .add_divider();
    }

    builder
        .add_context(["🏃‍♂️ Agile Sprint", "📊 Team Velocity", "📅 Sprint Review"])
        .add_buttons([
            ButtonSpec::new("Sprint Board")
                .url("https://sprint.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Burndown Chart").url("https://burndown.example.com"),
            ButtonSpec::new("Next Sprint").url("https://nextsprint.example.com"),
        ])
        .build()
}

/// Resource allocation request alert.
pub fn resource_alert(request: &ResourceRequest) -> SlackMessage {
    MessageBuilder::new()
        .add_header(format!("📋 Resource Request - {}", request.project_name))
        .add_section(format!("*Resource Type:* {}", request.resource_type))
        .add_section(format!("*Current Allocation:* {}", request.current_allocation))
        .add_section(format!("*Required Allocation:* {}", request.required_allocation))
        .add_section(format!("*Requested By:* {}", request.requested_by))
        .add_section(format!("*Request Time:* {}", now_stamp()))
        .add_divider()
        .add_section("⚡ *Impact Description:*")
        .add_section(request.impact_description.clone())
        .add_buttons([
            ButtonSpec::new("Approve Request")
                .url("https://approve.example.com")
                .style(ButtonStyle::Primary),
            ButtonSpec::new("Resource Pool").url("https://resources.example.com"),
        ])
        .build()
}

fn progress_bar(percentage: u32) -> String {
    let filled = (percentage / 10).min(10) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

fn completion_icon(percentage: u32) -> &'static str {
    if percentage >= 90 {
        "🎯"
    } else if percentage >= 70 {
        "🚀"
    } else if percentage >= 50 {
        "⚡"
    } else {
        "🔄"
    }
}
