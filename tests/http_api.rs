//! End-to-end tests for the task API over an in-process router.
//!
//! Each test drives the full boundary → service → repository stack against
//! the in-memory adapter, asserting the status-code contract and response
//! bodies of every endpoint.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;
use uuid::Uuid;

use aalto::http::router;
use aalto::task::adapters::memory::InMemoryTaskRepository;
use aalto::task::domain::{Task, TaskId};
use aalto::task::ports::{Page, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
use aalto::task::services::TaskService;

/// Builds a router over a fresh in-memory repository.
fn app() -> Router {
    let repository = Arc::new(InMemoryTaskRepository::new());
    router(Arc::new(TaskService::new(repository)))
}

/// Repository double whose backend is always unreachable.
#[derive(Debug, Clone, Default)]
struct UnreachableStorage;

impl UnreachableStorage {
    fn failure() -> TaskRepositoryError {
        TaskRepositoryError::persistence(std::io::Error::other("connection refused"))
    }
}

#[async_trait]
impl TaskRepository for UnreachableStorage {
    async fn store(&self, _task: &Task) -> TaskRepositoryResult<()> {
        Err(Self::failure())
    }

    async fn update(&self, _task: &Task) -> TaskRepositoryResult<()> {
        Err(Self::failure())
    }

    async fn find_by_id(&self, _id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Err(Self::failure())
    }

    async fn list(&self, _page: Page) -> TaskRepositoryResult<Vec<Task>> {
        Err(Self::failure())
    }

    async fn delete(&self, _id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Err(Self::failure())
    }

    async fn ping(&self) -> TaskRepositoryResult<()> {
        Err(Self::failure())
    }
}

/// Sends a request and returns the status with the parsed JSON body.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(payload) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())),
        None => Request::builder().method(method).uri(uri).body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should be routed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    let parsed = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, parsed)
}

async fn create_task(app: &Router, payload: Value) -> Value {
    let (status, body) = send(app, Method::POST, "/tasks/", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

fn field_str(body: &Value, key: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| panic!("field {key} should be a string: {body}"))
}

#[tokio::test(flavor = "multi_thread")]
async fn root_reports_liveness() {
    let (status, body) = send(&app(), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Task Manager API is running" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_connected_storage() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "database": "connected" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_disconnected_storage_with_ok_status() {
    let failing = router(Arc::new(TaskService::new(Arc::new(UnreachableStorage))));
    let (status, body) = send(&failing, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_str(&body, "status"), "unhealthy");
    assert_eq!(field_str(&body, "database"), "disconnected");
    assert!(body.get("error").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn storage_failures_map_to_internal_server_error() {
    let failing = router(Arc::new(TaskService::new(Arc::new(UnreachableStorage))));
    let (status, body) = send(&failing, Method::GET, "/tasks/", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "Internal server error" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_task_returns_created_representation() {
    let body = create_task(
        &app(),
        json!({ "title": "Test Task", "description": "d", "status": "created" }),
    )
    .await;

    assert_eq!(field_str(&body, "title"), "Test Task");
    assert_eq!(field_str(&body, "description"), "d");
    assert_eq!(field_str(&body, "status"), "created");
    Uuid::try_parse(&field_str(&body, "id")).expect("identifier should be a valid UUID");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_task_without_description_defaults_to_null() {
    let body = create_task(&app(), json!({ "title": "Task without description" })).await;
    assert_eq!(body.get("description"), Some(&Value::Null));
    assert_eq!(field_str(&body, "status"), "created");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_missing_title() {
    let (status, _body) = send(&app(), Method::POST, "/tasks/", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_blank_title() {
    let (status, body) =
        send(&app(), Method::POST, "/tasks/", Some(json!({ "title": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(field_str(&body, "detail").contains("title"));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_overlong_fields() {
    let overlong_title = "x".repeat(101);
    let (status, _body) = send(
        &app(),
        Method::POST,
        "/tasks/",
        Some(json!({ "title": overlong_title })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let overlong_description = "d".repeat(501);
    let (desc_status, _desc_body) = send(
        &app(),
        Method::POST,
        "/tasks/",
        Some(json!({ "title": "Test Task", "description": overlong_description })),
    )
    .await;
    assert_eq!(desc_status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_unknown_status() {
    let (status, _body) = send(
        &app(),
        Method::POST,
        "/tasks/",
        Some(json!({ "title": "Test Task", "status": "invalid_status" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_task_round_trips_created_representation() {
    let service = app();
    let created = create_task(
        &service,
        json!({ "title": "Test Task", "description": "d", "status": "in_progress" }),
    )
    .await;

    let id = field_str(&created, "id");
    let (status, fetched) = send(&service, Method::GET, &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_task_reports_not_found_for_unknown_identifier() {
    let unknown = Uuid::new_v4();
    let (status, body) = send(&app(), Method::GET, &format!("/tasks/{unknown}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Task not found" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_task_treats_malformed_identifier_as_not_found() {
    let (status, body) = send(&app(), Method::GET, "/tasks/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Task not found" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_task_applies_partial_changes() {
    let service = app();
    let created = create_task(
        &service,
        json!({ "title": "Test Task", "description": "d", "status": "in_progress" }),
    )
    .await;
    let id = field_str(&created, "id");

    let (status, updated) = send(
        &service,
        Method::PUT,
        &format!("/tasks/{id}"),
        Some(json!({ "title": "Renamed Task" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_str(&updated, "title"), "Renamed Task");
    assert_eq!(field_str(&updated, "description"), "d");
    assert_eq!(field_str(&updated, "status"), "in_progress");

    let (_fetch_status, fetched) = send(&service, Method::GET, &format!("/tasks/{id}"), None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_task_reports_not_found_for_unknown_identifier() {
    let unknown = Uuid::new_v4();
    let (status, body) = send(
        &app(),
        Method::PUT,
        &format!("/tasks/{unknown}"),
        Some(json!({ "title": "Renamed Task" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Task not found" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_task_rejects_unknown_status() {
    let service = app();
    let created = create_task(&service, json!({ "title": "Test Task" })).await;
    let id = field_str(&created, "id");

    let (status, _body) = send(
        &service,
        Method::PUT,
        &format!("/tasks/{id}"),
        Some(json!({ "status": "invalid_status" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_task_confirms_then_reports_not_found() {
    let service = app();
    let created = create_task(&service, json!({ "title": "Test Task" })).await;
    let id = field_str(&created, "id");

    let (status, body) = send(&service, Method::DELETE, &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Task deleted successfully" }));

    let (second_status, second_body) =
        send(&service, Method::DELETE, &format!("/tasks/{id}"), None).await;
    assert_eq!(second_status, StatusCode::NOT_FOUND);
    assert_eq!(second_body, json!({ "detail": "Task not found" }));

    let (fetch_status, _fetched) = send(&service, Method::GET, &format!("/tasks/{id}"), None).await;
    assert_eq!(fetch_status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_empty_array_when_no_records_exist() {
    let (status, body) = send(&app(), Method::GET, "/tasks/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_pagination_windows_follow_stable_order() {
    let service = app();
    for index in 0..5 {
        create_task(&service, json!({ "title": format!("Task {index}") })).await;
    }

    let (status, all) = send(&service, Method::GET, "/tasks/?skip=0&limit=100", None).await;
    assert_eq!(status, StatusCode::OK);
    let all_items = all.as_array().expect("list body should be an array").clone();
    assert_eq!(all_items.len(), 5);

    let (limited_status, limited) = send(&service, Method::GET, "/tasks/?limit=2", None).await;
    assert_eq!(limited_status, StatusCode::OK);
    let limited_items = limited.as_array().expect("list body should be an array");
    assert_eq!(limited_items.len(), 2);
    assert_eq!(limited_items.as_slice(), &all_items[0..2]);

    let (window_status, window) = send(&service, Method::GET, "/tasks/?skip=2&limit=2", None).await;
    assert_eq!(window_status, StatusCode::OK);
    let window_items = window.as_array().expect("list body should be an array");
    assert_eq!(window_items.len(), 2);
    assert_eq!(window_items.as_slice(), &all_items[2..4]);
}
