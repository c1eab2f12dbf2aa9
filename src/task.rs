//! The task record.
//!
//! A `Task` is built fresh from one line of the todo file on every read and
//! is never cached between invocations. Its `id` is the task's 1-based
//! position in the file at read time.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};

/// Date format used for every date field in the file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Positional id; 0 means not yet assigned.
    pub id: usize,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    pub description: String,
    pub projects: Vec<String>,
    pub contexts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Build a task from free-form user input, pulling `+project` and
    /// `@context` tags out of the text.
    pub fn from_input(input: &str) -> Self {
        let tagged = crate::tags::TaggedText::extract(input);
        Self {
            description: tagged.description,
            projects: tagged.projects,
            contexts: tagged.contexts,
            ..Self::default()
        }
    }

    /// Mark the task done on `date`. Returns false if it was already done.
    pub fn complete_on(&mut self, date: NaiveDate) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.completion_date = Some(date.format(DATE_FORMAT).to_string());
        true
    }
}

/// Validate a priority given on the command line.
///
/// Accepts a single ASCII letter, upper-casing it.
pub fn parse_priority(raw: &str) -> Result<char> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => Ok(ch.to_ascii_uppercase()),
        _ => Err(Error::InvalidArgument(format!(
            "invalid priority '{raw}': expected a single letter A-Z"
        ))),
    }
}

/// Validate a calendar date given on the command line.
pub fn parse_date(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .map_err(|err| {
            Error::InvalidArgument(format!("invalid date '{raw}': expected YYYY-MM-DD ({err})"))
        })
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
