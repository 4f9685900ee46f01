//! Task record management.
//!
//! Implements the task CRUD core: creating records with validated fields,
//! listing them in a stable order, partial updates that build an explicit
//! updated value before persisting, and permanent deletion. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
