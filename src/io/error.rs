//! Error types for project persistence, import validation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all planner operations
#[derive(Debug)]
pub enum PlannerError {
    /// Project document is missing fields or has the wrong shape
    InvalidProject {
        /// Description of what's wrong with the document
        reason: String,
    },

    /// Grid rows are ragged or exceed the supported dimensions
    InvalidGrid {
        /// Description of the shape problem
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No project with the given identifier exists in the store
    ProjectNotFound {
        /// Identifier that was looked up
        id: String,
    },

    /// Edit script could not be parsed
    Script {
        /// One-based line number of the offending command
        line: usize,
        /// Description of the parse failure
        reason: String,
    },

    /// Editor refused an operation; the reason was already reported
    Rejected {
        /// Operation that was refused
        operation: &'static str,
        /// Message delivered to the user
        reason: String,
    },

    /// Failed to save a rendered blueprint to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// Path of the document, when one is involved
        path: Option<PathBuf>,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProject { reason } | Self::InvalidGrid { reason } => {
                write!(f, "{reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ProjectNotFound { id } => {
                write!(f, "Project '{id}' not found")
            }
            Self::Script { line, reason } => {
                write!(f, "Script error on line {line}: {reason}")
            }
            Self::Rejected { operation, reason } => {
                write!(f, "Could not {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => match path {
                Some(path) => write!(f, "Malformed JSON in '{}': {source}", path.display()),
                None => write!(f, "Malformed JSON: {source}"),
            },
        }
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for planner results
pub type Result<T> = std::result::Result<T, PlannerError>;

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            path: None,
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PlannerError {
    PlannerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid project error
pub fn invalid_project(reason: &impl ToString) -> PlannerError {
    PlannerError::InvalidProject {
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> PlannerError {
    let path = path.into();
    move |source| PlannerError::FileSystem {
        path,
        operation,
        source,
    }
}
