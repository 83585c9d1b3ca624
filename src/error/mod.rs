//! Error types and handling infrastructure for the conversion pipeline

use std::fmt;
use std::path::{Path, PathBuf};

/// File operation that failed, used to label I/O errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Open,
    Create,
    Read,
    Write,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileOperation::Open => "open",
            FileOperation::Create => "create",
            FileOperation::Read => "read",
            FileOperation::Write => "write",
        };
        f.write_str(label)
    }
}

/// Main error type for pipeline operations
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to {operation} '{path}': {source}", path = .path.display())]
    Io {
        path: PathBuf,
        operation: FileOperation,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} is too short: {length} characters (need at least 5)")]
    MalformedLine { line: usize, length: usize },

    #[error("CSV record on line {line} has {fields} field(s) (need at least 2)")]
    MalformedRecord { line: usize, fields: usize },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error while trying to {operation}: {source}")]
    Database {
        operation: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl PipelineError {
    pub fn io(path: &Path, operation: FileOperation, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            operation,
            source,
        }
    }

    pub fn database(operation: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                path,
                operation: FileOperation::Open,
                source,
            } if source.kind() == std::io::ErrorKind::NotFound => {
                format!("Input file not found: {}", path.display())
            }
            Self::MalformedLine { line, length } => {
                format!(
                    "Malformed input at line {}: expected a 5 character ID, got {} characters",
                    line, length
                )
            }
            Self::MalformedRecord { line, fields } => {
                format!(
                    "Malformed CSV at line {}: expected 'ID;Name;', got {} field(s)",
                    line, fields
                )
            }
            Self::Database { operation, source } => match source {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    format!(
                        "Database constraint violated ({}); no rows were committed",
                        operation
                    )
                }
                _ => format!("Database error ({}): {}; no rows were committed", operation, source),
            },
            _ => self.to_string(),
        }
    }
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
