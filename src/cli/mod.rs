//! Command-line interface for todotxt
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::output::OutputOptions;
use crate::store::TaskStore;

mod add;
mod complete;
mod list;
mod rm;

/// todotxt - manage a todo.txt task list
///
/// Reads and writes a plain-text todo.txt file found in the current
/// directory (or the one given with --path).
#[derive(Parser, Debug)]
#[command(name = "todotxt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory containing todo.txt, or the file itself (defaults to current directory)
    #[arg(short, long, global = true, env = "TODOTXT_PATH")]
    pub path: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task; +project and @context tags in the text are extracted
    Add {
        /// Task text
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,

        /// Priority letter A-Z
        #[arg(long)]
        priority: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },

    /// List tasks
    List {
        /// Show only the task with this id
        #[arg(short, long)]
        id: Option<String>,
    },

    /// Delete a task
    #[command(visible_alias = "delete")]
    Rm {
        /// Task id (as shown by `list`)
        id: String,
    },

    /// Mark a task as completed
    Complete {
        /// Task id (as shown by `list`)
        id: String,
    },
}

/// Log verbosity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default tracing filter when RUST_LOG is not set
    pub fn filter(self) -> &'static str {
        match self {
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Settings shared by every command, resolved once from the global flags
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub output: OutputOptions,
}

impl Settings {
    pub fn store(&self) -> TaskStore {
        TaskStore::open(self.root.clone())
    }
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.debug {
            Verbosity::Debug
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn settings(&self) -> Settings {
        let root = self
            .path
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        Settings {
            root,
            output: OutputOptions {
                json: self.json,
                quiet: self.quiet,
            },
        }
    }

    /// Run the CLI command
    pub fn run(self) -> Result<()> {
        let settings = self.settings();
        tracing::debug!(root = %settings.root.display(), "resolved search root");

        match self.command {
            Commands::Add {
                words,
                priority,
                due,
            } => add::run(
                add::AddOptions {
                    text: words.join(" "),
                    priority,
                    due,
                },
                &settings,
            ),
            Commands::List { id } => list::run(list::ListOptions { id }, &settings),
            Commands::Rm { id } => rm::run(rm::RmOptions { id }, &settings),
            Commands::Complete { id } => {
                complete::run(complete::CompleteOptions { id }, &settings)
            }
        }
    }
}
