//! Canonical line formatting.
//!
//! Field order: `[#id] [x] [(P)] <date> <description> [+project]* [@context]* [due:date]`.
//! Open tasks carry their creation date in the date slot, completed tasks
//! their completion date. The output is accepted by [`crate::parser::parse_line`].

use std::fmt;

use chrono::NaiveDate;

use crate::task::{self, Task, DATE_FORMAT};

/// Format a task for writing, filling an empty date slot with today's date.
pub fn format(task: &Task) -> String {
    format_on(task, task::today())
}

/// Format a task for writing, filling an empty date slot with `today`.
pub fn format_on(task: &Task, today: NaiveDate) -> String {
    let fallback = today.format(DATE_FORMAT).to_string();
    render(task, Some(fallback.as_str()))
}

/// Read-path rendering: never injects a date.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, None))
    }
}

fn render(task: &Task, fallback_date: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::new();

    if task.id > 0 {
        parts.push(format!("#{}", task.id));
    }
    if task.completed {
        parts.push("x".to_string());
    }
    if let Some(priority) = task.priority {
        parts.push(format!("({priority})"));
    }

    let date = if task.completed {
        task.completion_date.as_deref()
    } else {
        task.creation_date.as_deref()
    };
    if let Some(date) = date.filter(|d| !d.is_empty()).or(fallback_date) {
        parts.push(date.to_string());
    }

    if !task.description.is_empty() {
        parts.push(task.description.clone());
    }
    parts.extend(task.projects.iter().map(|project| format!("+{project}")));
    parts.extend(task.contexts.iter().map(|context| format!("@{context}")));
    if let Some(due) = task.due_date.as_deref().filter(|d| !d.is_empty()) {
        parts.push(format!("due:{due}"));
    }

    parts.join(" ").trim_end().to_string()
}
