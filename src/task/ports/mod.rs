//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{Page, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
