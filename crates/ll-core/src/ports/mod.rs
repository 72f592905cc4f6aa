//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

pub mod errors;
pub mod menu_repository;
pub mod menu_source;
pub mod profile_store;

pub use errors::{MenuRepositoryError, MenuSourceError, ProfileStoreError};
pub use menu_repository::MenuRepositoryPort;
pub use menu_source::MenuSourcePort;
pub use profile_store::ProfileStorePort;
