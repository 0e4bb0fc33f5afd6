//! Error types and exit codes for wikiroute
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm)
//! - 3: Data error (malformed input, broken search preconditions)

mod macros;

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
    /// Data error - malformed input or violated search precondition (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading graphs and searching them
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("unsupported algorithm: {name} (supported: dijkstra, dial)")]
    UnsupportedAlgorithm { name: String },

    // Data errors (exit code 3)
    #[error("malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invariant violation: {reason}")]
    InvariantViolation { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RouteError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a broken algorithm precondition
    pub fn invariant(reason: impl Into<String>) -> Self {
        RouteError::InvariantViolation {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UsageError(_) | RouteError::UnsupportedAlgorithm { .. } => {
                ExitCode::Usage
            }

            RouteError::MalformedRecord { .. }
            | RouteError::NotFound { .. }
            | RouteError::InvariantViolation { .. } => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::Toml(_)
            | RouteError::FailedOperationWithTarget { .. }
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UsageError(_) => "usage_error",
            RouteError::UnsupportedAlgorithm { .. } => "unsupported_algorithm",
            RouteError::MalformedRecord { .. } => "malformed_record",
            RouteError::NotFound { .. } => "not_found",
            RouteError::InvariantViolation { .. } => "invariant_violation",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RouteError::Other(_) => "other",
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

/// Result type alias for wikiroute operations
pub type Result<T> = std::result::Result<T, RouteError>;
