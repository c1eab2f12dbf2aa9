//! Line parser for the todo.txt format.
//!
//! Grammar (tokens separated by whitespace):
//!
//! ```text
//! line     := ["#" id] ["x"] [priority] [date] word*
//! priority := "(" A-Z ")"
//! date     := YYYY-MM-DD
//! word     := "+" project | "@" context | "due:" date | text
//! ```
//!
//! Parsing never fails. Anything that does not match a rule ends up in the
//! description.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::task::Task;

static PRIORITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(([A-Z])\)$").expect("valid priority regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

const PROJECT_PREFIX: &str = "+";
const CONTEXT_PREFIX: &str = "@";
const DUE_PREFIX: &str = "due:";

/// Parse one raw line into a task.
///
/// Only the first date-shaped token after the priority is read as a date.
/// It becomes the completion date for completed tasks and the creation date
/// otherwise; any later date token is plain description text.
pub fn parse_line(line: &str) -> Task {
    let mut task = Task::default();
    let mut words: Vec<&str> = line.split_whitespace().collect();

    if let Some(id) = words.first().and_then(|word| parse_id_marker(word)) {
        task.id = id;
        words.remove(0);
    }

    if words.first() == Some(&"x") {
        task.completed = true;
        words.remove(0);
    }

    if let Some(priority) = words.first().and_then(|word| parse_priority(word)) {
        task.priority = Some(priority);
        words.remove(0);
    }

    if let Some(pos) = words.iter().position(|word| is_date(word)) {
        let date = words.remove(pos).to_string();
        if task.completed {
            task.completion_date = Some(date);
        } else {
            task.creation_date = Some(date);
        }
    }

    let mut description = Vec::new();
    for word in words {
        if let Some(project) = strip_tag(word, PROJECT_PREFIX) {
            task.projects.push(project.to_string());
        } else if let Some(context) = strip_tag(word, CONTEXT_PREFIX) {
            task.contexts.push(context.to_string());
        } else if let Some(due) = strip_tag(word, DUE_PREFIX) {
            task.due_date = Some(due.to_string());
        } else {
            description.push(word);
        }
    }
    task.description = description.join(" ").trim().to_string();

    task
}

/// True if the token has the `YYYY-MM-DD` shape. No calendar check.
pub fn is_date(word: &str) -> bool {
    DATE_RE.is_match(word)
}

fn parse_id_marker(word: &str) -> Option<usize> {
    word.strip_prefix('#')?.parse().ok()
}

fn parse_priority(word: &str) -> Option<char> {
    PRIORITY_RE
        .captures(word)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
}

// A bare prefix ("+", "@", "due:") carries no value and stays text.
fn strip_tag<'a>(word: &'a str, prefix: &str) -> Option<&'a str> {
    word.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}
