//! Error types for todotxt
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (missing todo file, bad id, bad arguments or config)
//! - 4: Operation failed (I/O or serialization error)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the todotxt CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for todotxt operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("{name} not found in {root}")]
    FileNotFound { name: String, root: PathBuf },

    #[error("No task with id {0}")]
    TaskNotFound(usize),

    #[error("Invalid task id: {0:?}")]
    InvalidId(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::FileNotFound { .. }
            | Error::TaskNotFound(_)
            | Error::InvalidId(_)
            | Error::InvalidArgument(_)
            | Error::InvalidConfig(_) => exit_codes::USER_ERROR,

            Error::Io(_) | Error::Json(_) | Error::TomlParse(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Structured details for the JSON error envelope
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::FileNotFound { name, root } => Some(serde_json::json!({
                "file_name": name,
                "root": root.display().to_string(),
            })),
            Error::TaskNotFound(id) => Some(serde_json::json!({ "id": id })),
            Error::InvalidId(raw) => Some(serde_json::json!({ "id": raw })),
            Error::InvalidArgument(message) | Error::InvalidConfig(message) => {
                Some(serde_json::json!({ "message": message }))
            }
            _ => None,
        }
    }
}

/// Result type alias for todotxt operations
pub type Result<T> = std::result::Result<T, Error>;

