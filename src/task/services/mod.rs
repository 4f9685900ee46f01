//! Application services for task CRUD orchestration.

mod crud;

pub use crud::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
