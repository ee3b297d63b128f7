//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::Status;
use crate::models::task::Task;
use crate::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    /// URL-safe form of the name. Uniqueness is not enforced.
    pub slug: String,
    pub status: Status,
    /// Opaque collaborator identifiers (emails or usernames), stored as a
    /// native array column.
    pub collaborators: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub slug: String,
    pub status: Status,
    pub collaborators: Vec<String>,
}

/// A project with its tasks nested inline, as returned by `GET /projects`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithTasks {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<Task>,
}
