//! Route registration and request handlers for the task API.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use super::error::ApiError;
use super::payload::{CreateTaskBody, ListQuery, TaskBody, UpdateTaskBody};
use crate::task::domain::TaskId;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskService;

/// Shared application state for task handlers.
pub struct AppState<R>
where
    R: TaskRepository,
{
    service: Arc<TaskService<R>>,
}

impl<R> Clone for AppState<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Builds the complete router over the given task service.
pub fn router<R>(service: Arc<TaskService<R>>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/tasks/", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(AppState { service })
}

/// Parses a path identifier, reporting malformed values as not-found
/// rather than as a server error.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    TaskId::from_str(raw).map_err(|_| ApiError::task_not_found())
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Task Manager API is running" }))
}

async fn health<R>(State(state): State<AppState<R>>) -> Json<Value>
where
    R: TaskRepository + 'static,
{
    match state.service.check_storage().await {
        Ok(()) => Json(json!({ "status": "healthy", "database": "connected" })),
        Err(err) => {
            tracing::error!(error = %err, "health check failed");
            Json(json!({
                "status": "unhealthy",
                "database": "disconnected",
                "error": err.to_string(),
            }))
        }
    }
}

async fn list_tasks<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<TaskBody>>, ApiError>
where
    R: TaskRepository + 'static,
{
    let tasks = state.service.list(query.into()).await?;
    Ok(Json(tasks.iter().map(TaskBody::from).collect()))
}

async fn create_task<R>(
    State(state): State<AppState<R>>,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskBody>), ApiError>
where
    R: TaskRepository + 'static,
{
    let task = state.service.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(TaskBody::from(&task))))
}

async fn get_task<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<TaskBody>, ApiError>
where
    R: TaskRepository + 'static,
{
    let task_id = parse_task_id(&id)?;
    let task = state.service.get(task_id).await?;
    Ok(Json(TaskBody::from(&task)))
}

async fn update_task<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<TaskBody>, ApiError>
where
    R: TaskRepository + 'static,
{
    let task_id = parse_task_id(&id)?;
    let task = state.service.update(task_id, body.into()).await?;
    Ok(Json(TaskBody::from(&task)))
}

async fn delete_task<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
    R: TaskRepository + 'static,
{
    let task_id = parse_task_id(&id)?;
    state.service.delete(task_id).await?;
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
