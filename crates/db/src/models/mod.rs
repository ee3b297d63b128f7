//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - A `Serialize`-only composite struct with the related entity nested inline
//!
//! JSON field names are camelCase to match the wire format consumed by the
//! frontend (`projectId`, `dueDate`, `createdAt`).

pub mod project;
pub mod status;
pub mod task;
