//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Lifecycle status in canonical string form.
    pub status: String,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional task description.
    pub description: Option<String>,
    /// Lifecycle status in canonical string form.
    pub status: String,
}

/// Full-row changeset for task updates.
///
/// `treat_none_as_null` makes the write an exact image of the updated
/// domain value rather than a skip-if-absent merge.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskRowChangeset {
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: String,
}
