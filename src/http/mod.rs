//! HTTP boundary for the task API.
//!
//! Translates requests into task service calls and maps error kinds to
//! status codes: validation failures to 422, missing records to 404, and
//! storage failures to 500. The boundary owns no business rules.

pub mod error;
pub mod payload;
pub mod routes;

pub use error::ApiError;
pub use routes::router;
