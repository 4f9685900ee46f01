//! Service layer for task CRUD operations.

use crate::task::{
    domain::{Task, TaskChanges, TaskDescription, TaskDomainError, TaskId, TaskStatus, TaskTitle},
    ports::{Page, TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status; defaults to `created` when absent.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Request payload for partially updating a task.
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn into_changes(self) -> Result<TaskChanges, TaskDomainError> {
        let title = self.title.map(TaskTitle::new).transpose()?;
        let description = self.description.map(TaskDescription::new).transpose()?;
        let status = self
            .status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()
            .map_err(TaskDomainError::from)?;
        Ok(TaskChanges {
            title,
            description,
            status,
        })
    }
}

/// Service-level errors for task CRUD operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input failed schema validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// No task has the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The storage backend failed.
    #[error(transparent)]
    Storage(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task CRUD orchestration service.
///
/// Implements the five operations over the repository port: validate input,
/// fetch the stored value where needed, build the updated value, and
/// persist it as one atomic write.
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new task with a freshly assigned identifier.
    ///
    /// Status defaults to `created` when absent from the request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when a field fails schema
    /// constraints, or [`TaskServiceError::Storage`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = request.description.map(TaskDescription::new).transpose()?;
        let status = request
            .status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()
            .map_err(TaskDomainError::from)?
            .unwrap_or_default();

        let task = Task::new(title, description, status);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Returns tasks within the given scan window, in stable order.
    ///
    /// Returns an empty sequence, never an error, when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the scan fails.
    pub async fn list(&self, page: Page) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list(page).await?)
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no record has the
    /// identifier, or [`TaskServiceError::Storage`] when the lookup fails.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Applies a partial update to the task with the given identifier.
    ///
    /// The stored record is fetched first, the updated value is built from
    /// it, and the full row is persisted as one atomic write. Fields absent
    /// from the request keep their stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no record has the
    /// identifier, [`TaskServiceError::Validation`] when a provided field
    /// fails schema constraints, or [`TaskServiceError::Storage`] when
    /// persistence fails.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let existing = self.get(id).await?;
        let changes = request.into_changes()?;
        let updated = existing.apply_changes(changes);
        self.repository.update(&updated).await?;
        Ok(updated)
    }

    /// Removes the task with the given identifier permanently.
    ///
    /// Returns the pre-deletion record. A second delete of the same
    /// identifier reports not-found: the operation is idempotent only in
    /// end-state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no record has the
    /// identifier, or [`TaskServiceError::Storage`] when the delete fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .delete(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Verifies that the storage backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Storage`] when the backend cannot be
    /// reached.
    pub async fn check_storage(&self) -> TaskServiceResult<()> {
        Ok(self.repository.ping().await?)
    }
}
