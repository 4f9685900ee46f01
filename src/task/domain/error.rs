//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title is {actual} characters, maximum is {max}")]
    TitleTooLong {
        /// Character count of the rejected value.
        actual: usize,
        /// Largest accepted character count.
        max: usize,
    },

    /// The task description exceeds the persisted column width.
    #[error("task description is {actual} characters, maximum is {max}")]
    DescriptionTooLong {
        /// Character count of the rejected value.
        actual: usize,
        /// Largest accepted character count.
        max: usize,
    },

    /// The status value is outside the closed enumeration.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

/// Error returned while parsing task statuses from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
