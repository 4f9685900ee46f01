//! Repository port for task persistence, lookup, and scans.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Offset/limit window for list scans.
///
/// The limit is clamped into `[1, MAX_LIMIT]` at construction so adapters
/// never see an unbounded or zero-sized window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: i64,
    limit: i64,
}

impl Page {
    /// Limit applied when the caller does not provide one.
    pub const DEFAULT_LIMIT: u32 = 100;

    /// Largest accepted page size.
    pub const MAX_LIMIT: i64 = 100;

    /// Creates a scan window from unsigned boundary inputs.
    #[must_use]
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset: i64::from(offset),
            limit: i64::from(limit).clamp(1, Self::MAX_LIMIT),
        }
    }

    /// Returns the number of leading records to skip.
    #[must_use]
    pub const fn offset(self) -> i64 {
        self.offset
    }

    /// Returns the maximum number of records to return.
    #[must_use]
    pub const fn limit(self) -> i64 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}

/// Task persistence contract.
///
/// Every mutating operation is a single atomic unit against the backing
/// store: a partially applied write must never be observable, and a
/// successful write is visible to all subsequent reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists the full updated value of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist (including when it was deleted between lookup and write).
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns tasks in primary-key order within the given window.
    ///
    /// The order is stable for an unchanged storage state; it does not
    /// follow creation order.
    async fn list(&self, page: Page) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes a task permanently, returning the pre-deletion record.
    ///
    /// Returns `None` when no record has the identifier.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Verifies that the storage backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backend cannot
    /// be reached.
    async fn ping(&self) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
