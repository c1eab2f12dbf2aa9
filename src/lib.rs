//! todotxt - todo.txt task list library
//!
//! Parses and writes the todo.txt line format and keeps a task list in a
//! single plain-text file.
//!
//! # Core Concepts
//!
//! - **Task**: one line of the file; completion, priority, dates,
//!   description, `+project`/`@context` tags and `due:` date
//! - **Positional ids**: a task's id is its line position at read time
//! - **Lenient parsing**: anything unrecognised stays in the description
//!
//! # Module Organization
//!
//! - `task`: The task record and argument validation helpers
//! - `parser`: Line to task
//! - `format`: Task to line
//! - `tags`: Tag extraction from free-form input
//! - `locate`: Bounded-depth search for the backing file
//! - `store`: List, get, add, complete and delete against the file
//! - `config`: Configuration loading from `.todotxt.toml`
//! - `error`: Error types and result aliases
//! - `output`: Human and JSON output for CLI commands
//! - `cli`: Command-line interface using clap

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod locate;
pub mod output;
pub mod parser;
pub mod store;
pub mod tags;
pub mod task;

pub use error::{Error, Result};
pub use format::format;
pub use parser::parse_line;
pub use store::TaskStore;
pub use task::Task;
