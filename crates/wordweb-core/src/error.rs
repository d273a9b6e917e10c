//! Error types and exit codes for wordweb
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, traversal invariant violations)
//! - 2: Usage error (bad flags/args, invalid rule set, malformed config)
//! - 3: Data error (missing word list)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or unreadable input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or analysing a word graph
#[derive(Error, Debug)]
pub enum WordWebError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid rule set: at least one of substitution, insertion/deletion or anagram must be enabled")]
    InvalidRuleSet,

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    // Data errors (exit code 3)
    #[error("word list not found: {path:?}")]
    WordListNotFound { path: PathBuf },

    // Traversal invariant violations (exit code 1)
    #[error("attempting to insert duplicate value {item} into frontier")]
    DuplicateInsertion { item: String },

    #[error("frontier queue is empty")]
    EmptyFrontier,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },
}

impl WordWebError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        WordWebError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WordWebError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a duplicate frontier insertion
    pub fn duplicate_insertion(item: impl std::fmt::Debug) -> Self {
        WordWebError::DuplicateInsertion {
            item: format!("{:?}", item),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WordWebError::UsageError(_)
            | WordWebError::InvalidRuleSet
            | WordWebError::InvalidValue { .. }
            | WordWebError::Toml(_) => ExitCode::Usage,

            WordWebError::WordListNotFound { .. } => ExitCode::Data,

            WordWebError::DuplicateInsertion { .. }
            | WordWebError::EmptyFrontier
            | WordWebError::Io(_)
            | WordWebError::Json(_)
            | WordWebError::FailedOperationWithTarget { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WordWebError::UsageError(_) => "usage_error",
            WordWebError::InvalidRuleSet => "invalid_rule_set",
            WordWebError::InvalidValue { .. } => "invalid_value",
            WordWebError::WordListNotFound { .. } => "word_list_not_found",
            WordWebError::DuplicateInsertion { .. } => "duplicate_insertion",
            WordWebError::EmptyFrontier => "empty_frontier",
            WordWebError::Io(_) => "io_error",
            WordWebError::Json(_) => "json_error",
            WordWebError::Toml(_) => "toml_error",
            WordWebError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wordweb operations
pub type Result<T> = std::result::Result<T, WordWebError>;
