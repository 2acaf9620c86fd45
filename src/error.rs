//! Error types for taskline.
//!
//! Two families share one enum: insertion-time validation errors (all
//! user-correctable, rejected with a specific reason and no partial store
//! mutation) and scheduling errors (cycle detection, empty store). Suggestion
//! provider failures never appear here — they are absorbed at the boundary
//! and converted to the local heuristic fallback.

use thiserror::Error;

/// Result alias for taskline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the store and the scheduling pipeline.
#[derive(Error, Debug)]
pub enum Error {
    // Insertion validation
    #[error("task name must not be empty")]
    EmptyName,

    #[error("duration must be a positive number of days")]
    InvalidDuration,

    #[error("task name must be unique: '{0}' already exists")]
    DuplicateName(String),

    #[error("dependency task not found: '{0}'")]
    DependencyNotFound(String),

    #[error("task '{0}' must have at least one human or bot assigned")]
    NoResources(String),

    // Scheduling
    #[error("no tasks to schedule")]
    NoTasks,

    #[error("circular dependency detected: {}", .0.join(", "))]
    CircularDependency(Vec<String>),

    // Snapshot I/O
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from insertion validation (user-correctable).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyName
                | Error::InvalidDuration
                | Error::DuplicateName(_)
                | Error::DependencyNotFound(_)
                | Error::NoResources(_)
        )
    }
}
