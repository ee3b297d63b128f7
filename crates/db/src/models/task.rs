//! Task entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::project::Project;
use crate::models::status::Status;
use crate::types::{DbId, Timestamp};

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub status: Status,
    /// Optional date-only deadline.
    pub due_date: Option<NaiveDate>,
    /// Owning project. Referential integrity is delegated to the store.
    pub project_id: DbId,
    pub collaborators: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub name: String,
    pub description: String,
    pub status: Status,
    pub due_date: Option<NaiveDate>,
    pub project_id: DbId,
    pub collaborators: Vec<String>,
}

/// A task with its owning project nested inline, as returned by `GET /tasks`.
#[derive(Debug, Clone, Serialize)]
pub struct TaskWithProject {
    #[serde(flatten)]
    pub task: Task,
    pub project: Project,
}
