//! Aalto: task manager HTTP service.
//!
//! This crate provides a minimal CRUD service for task records backed by
//! `PostgreSQL` and exposed over HTTP.
//!
//! # Architecture
//!
//! Aalto follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, tests)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, and CRUD orchestration
//! - [`http`]: Request routing and error-to-status mapping

pub mod http;
pub mod task;
