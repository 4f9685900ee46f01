//! Wire payloads for the task API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::domain::{Task, TaskStatus};
use crate::task::ports::Page;
use crate::task::services::{CreateTaskRequest, UpdateTaskRequest};

/// Request body for `POST /tasks/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Required task title.
    pub title: String,
    /// Optional task description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional initial status; defaults to `created`.
    #[serde(default)]
    pub status: Option<String>,
}

impl From<CreateTaskBody> for CreateTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        let mut request = Self::new(body.title);
        if let Some(description) = body.description {
            request = request.with_description(description);
        }
        if let Some(status) = body.status {
            request = request.with_status(status);
        }
        request
    }
}

/// Request body for `PUT /tasks/{id}`.
///
/// Absent and `null` fields both mean "leave unchanged"; an empty string is
/// a provided value and is validated as such.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title, if provided.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description, if provided.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement status, if provided.
    #[serde(default)]
    pub status: Option<String>,
}

impl From<UpdateTaskBody> for UpdateTaskRequest {
    fn from(body: UpdateTaskBody) -> Self {
        let mut request = Self::new();
        if let Some(title) = body.title {
            request = request.with_title(title);
        }
        if let Some(description) = body.description {
            request = request.with_description(description);
        }
        if let Some(status) = body.status {
            request = request.with_status(status);
        }
        request
    }
}

/// Query parameters for `GET /tasks/`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListQuery {
    /// Number of leading records to skip.
    #[serde(default)]
    pub skip: u32,
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

const fn default_limit() -> u32 {
    Page::DEFAULT_LIMIT
}

impl From<ListQuery> for Page {
    fn from(query: ListQuery) -> Self {
        Self::new(query.skip, query.limit)
    }
}

/// Task representation returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskBody {
    /// Task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Task description, `null` when absent.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: TaskStatus,
}

impl From<&Task> for TaskBody {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|d| d.as_str().to_owned()),
            status: task.status(),
        }
    }
}
