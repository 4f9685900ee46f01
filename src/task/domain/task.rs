//! Task aggregate root and lifecycle status.

use super::{ParseTaskStatusError, TaskDescription, TaskId, TaskTitle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
///
/// A closed enumeration; no transition graph is enforced, so any status may
/// be set from any other via update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    #[default]
    Created,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "created" => Ok(Self::Created),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task aggregate root.
///
/// The identifier is assigned at creation and immutable; all other fields
/// change only by building an updated value via [`Task::apply_changes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
}

/// Validated partial update applied to an existing task.
///
/// Fields left as `None` keep their prior value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title, if provided.
    pub title: Option<TaskTitle>,
    /// Replacement description, if provided.
    pub description: Option<TaskDescription>,
    /// Replacement status, if provided.
    pub status: Option<TaskStatus>,
}

impl TaskChanges {
    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

impl Task {
    /// Creates a new task with a freshly assigned identifier.
    #[must_use]
    pub fn new(title: TaskTitle, description: Option<TaskDescription>, status: TaskStatus) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description,
            status,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Builds the updated task value resulting from a partial update.
    ///
    /// Fields absent from `changes` keep their prior value; the identifier
    /// is never replaced.
    #[must_use]
    pub fn apply_changes(&self, changes: TaskChanges) -> Self {
        Self {
            id: self.id,
            title: changes.title.unwrap_or_else(|| self.title.clone()),
            description: changes.description.map_or_else(|| self.description.clone(), Some),
            status: changes.status.unwrap_or(self.status),
        }
    }
}
