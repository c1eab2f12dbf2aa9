//! Tag extraction from free-form input.
//!
//! Used when a task is created from text typed on the command line, e.g.
//! `Buy milk +shopping @errands`.

use once_cell::sync::Lazy;
use regex::Regex;

// Tags are whole tokens: the prefix must start the input or follow whitespace.
static PROJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)\+(\S+)").expect("valid project regex"));
static CONTEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)@(\S+)").expect("valid context regex"));
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)[+@]\S+").expect("valid tag regex"));

/// Description and tags pulled out of one piece of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedText {
    pub description: String,
    pub projects: Vec<String>,
    pub contexts: Vec<String>,
}

impl TaggedText {
    pub fn extract(input: &str) -> Self {
        Self {
            description: extract_description(input),
            projects: extract_projects(input),
            contexts: extract_contexts(input),
        }
    }
}

/// All `+project` tags, prefix stripped, in order of appearance.
pub fn extract_projects(input: &str) -> Vec<String> {
    extract_by_prefix(input, &PROJECT_RE)
}

/// All `@context` tags, prefix stripped, in order of appearance.
pub fn extract_contexts(input: &str) -> Vec<String> {
    extract_by_prefix(input, &CONTEXT_RE)
}

/// Capture group 1 of every match of `pattern`, i.e. the tag without its prefix.
pub fn extract_by_prefix(input: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .captures_iter(input)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The input with every tag removed and whitespace collapsed.
pub fn extract_description(input: &str) -> String {
    TAG_RE
        .replace_all(input, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
