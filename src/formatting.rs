//! Plain-text rendering of the store's views
//!
//! These are the command-line counterparts of the dashboard, kanban board,
//! Gantt chart, calendar and timesheet.

use crate::store::{Project, ProjectStore, StatusBuckets, Summary, Task, User};
use chrono::NaiveDate;
use std::collections::BTreeMap;

fn format_task_line(task: &Task) -> String {
    let mut line = format!("- [{}] {}", task.id, task.title);
    if !task.assignees.is_empty() {
        let names: Vec<&str> = task.assignees.iter().map(|u| u.name.as_str()).collect();
        line.push_str(&format!(" ({})", names.join(", ")));
    }
    if !task.sub_tasks.is_empty() {
        line.push_str(&format!(
            " [{}/{} sub-tasks]",
            task.completed_sub_tasks(),
            task.sub_tasks.len()
        ));
    }
    line.push('\n');
    line
}

fn format_span(task: &Task) -> String {
    match (task.start_date, task.due_date) {
        (Some(start), Some(due)) => format!("{} .. {}", start, due),
        (Some(start), None) => format!("{} ..", start),
        (None, Some(due)) => format!(".. {}", due),
        (None, None) => "unscheduled".to_string(),
    }
}

/// List projects with section and task counts, marking the selected one
pub fn format_projects(store: &ProjectStore) -> String {
    if store.projects().is_empty() {
        return "No projects found".to_string();
    }

    let current = store.current_project_id();
    let mut result = format!("Found {} project(s):\n\n", store.projects().len());
    for project in store.projects() {
        let marker = if current == Some(project.id.as_str()) { "*" } else { "-" };
        result.push_str(&format!(
            "{} [{}] {} ({} section(s), {} task(s))\n",
            marker,
            project.id,
            project.name,
            project.sections.len(),
            project.tasks().count()
        ));
        if let Some(due) = project.due_date {
            result.push_str(&format!("  Due: {}\n", due));
        }
    }
    result
}

/// Render the dashboard totals and upcoming deadlines
pub fn format_summary(summary: &Summary<'_>) -> String {
    let mut result = format!(
        "Projects: {} (across {} group(s))
",
        summary.project_count, summary.group_count
    );
    result.push_str(&format!(
        "Tasks: {} ({} completed, {}%)
",
        summary.total_tasks, summary.completed_tasks, summary.completion_percent
    ));

    if summary.upcoming_deadlines.is_empty() {
        result.push_str("\nNo upcoming deadlines");
        return result;
    }
    result.push_str(&format!(
        "\nUpcoming deadlines ({}):\n",
        summary.upcoming_deadlines.len()
    ));
    for project in &summary.upcoming_deadlines {
        if let Some(due) = project.due_date {
            result.push_str(&format!("- [{}] {} due {}\n", project.id, project.name, due));
        }
    }
    result
}

/// Render status buckets as kanban columns
pub fn format_kanban(project: &Project, buckets: &StatusBuckets<'_>) -> String {
    let mut result = format!("{} - board\n", project.name);
    for bucket in buckets.iter() {
        let color = bucket.column.map(|c| c.color.as_str()).unwrap_or("-");
        result.push_str(&format!(
            "\n## {} ({}) [{}]\n",
            bucket.status,
            bucket.tasks.len(),
            color
        ));
        for task in &bucket.tasks {
            result.push_str(&format_task_line(task));
        }
    }
    result
}

/// Render tasks in Gantt order with their date spans and dependencies
pub fn format_gantt(project: &Project, tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return format!("{} - timeline\n\nNo tasks found", project.name);
    }

    let mut result = format!("{} - timeline\n\n", project.name);
    for task in tasks {
        result.push_str(&format!(
            "- [{}] {} | {} | {}\n",
            task.id,
            task.title,
            format_span(task),
            task.status
        ));
        if !task.dependencies.is_empty() {
            result.push_str(&format!("  Depends on: {}\n", task.dependencies.join(", ")));
        }
    }
    result
}

/// Render calendar tasks grouped by start day
pub fn format_calendar(
    project: &Project,
    start: NaiveDate,
    end: NaiveDate,
    days: &BTreeMap<NaiveDate, Vec<&Task>>,
) -> String {
    let mut result = format!("{} - calendar {} .. {}\n", project.name, start, end);
    if days.is_empty() {
        result.push_str("\nNo tasks found");
        return result;
    }
    for (day, tasks) in days {
        result.push_str(&format!("\n{}\n", day.format("%a %Y-%m-%d")));
        for task in tasks {
            result.push_str(&format!("- [{}] {} ({})\n", task.id, task.title, format_span(task)));
        }
    }
    result
}

/// Render per-user workloads as one row per user with the daily hours
///
/// Days with no hours are shown as `.`.
pub fn format_timesheet(
    users: &[User],
    workloads: &BTreeMap<String, BTreeMap<String, f64>>,
) -> String {
    if users.is_empty() {
        return "No users found".to_string();
    }

    let mut result = String::new();
    for user in users {
        let Some(days) = workloads.get(&user.id) else {
            continue;
        };
        let total: f64 = days.values().sum();
        result.push_str(&format!("{} ({:.1}h)\n", user.name, total));
        for (date, hours) in days {
            if *hours == 0.0 {
                result.push_str(&format!("  {} .\n", date));
            } else {
                result.push_str(&format!("  {} {:.1}\n", date, hours));
            }
        }
    }
    result
}
