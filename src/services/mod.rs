//! Service layer for business logic
//!
//! The `MappingService` is what collaborators (HTTP handlers, CLIs,
//! UIs) talk to; it owns validation, idempotence and collision retry on
//! top of a storage backend.

mod mapping_service;

pub use mapping_service::*;
