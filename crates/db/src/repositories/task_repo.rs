//! Repository for the `tasks` table.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};
use crate::models::project::Project;
use crate::models::task::{CreateTask, Task, TaskWithProject};
use crate::repositories::ProjectRepo;
use crate::types::DbId;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, status, due_date, project_id, collaborators, created_at, updated_at";

/// Provides read and insert operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// Fails with a constraint violation if `project_id` does not reference
    /// an existing project.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> StoreResult<Task> {
        let query = format!(
            "INSERT INTO tasks (name, description, status, due_date, project_id, collaborators)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.due_date)
            .bind(input.project_id)
            .bind(&input.collaborators)
            .fetch_one(pool)
            .await?;
        Ok(task)
    }

    /// Insert a batch of tasks in a single statement, returning the created
    /// rows in insertion order.
    pub async fn create_many(pool: &PgPool, inputs: &[CreateTask]) -> StoreResult<Vec<Task>> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }
        let mut builder = sqlx::QueryBuilder::new(
            "INSERT INTO tasks (name, description, status, due_date, project_id, collaborators) ",
        );
        builder.push_values(inputs, |mut row, input| {
            row.push_bind(&input.name)
                .push_bind(&input.description)
                .push_bind(input.status)
                .push_bind(input.due_date)
                .push_bind(input.project_id)
                .push_bind(&input.collaborators);
        });
        builder.push(format!(" RETURNING {COLUMNS}"));
        let tasks = builder.build_query_as::<Task>().fetch_all(pool).await?;
        Ok(tasks)
    }

    /// List all tasks. Ordered by ID so repeated reads are byte-identical.
    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Task>> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        let tasks = sqlx::query_as::<_, Task>(&query).fetch_all(pool).await?;
        Ok(tasks)
    }

    /// List all tasks with the owning project nested inline.
    pub async fn list_with_projects(pool: &PgPool) -> StoreResult<Vec<TaskWithProject>> {
        let tasks = Self::list(pool).await?;
        let projects = ProjectRepo::list(pool).await?;

        let by_id: HashMap<DbId, Project> =
            projects.into_iter().map(|p| (p.id, p)).collect();

        tasks
            .into_iter()
            .map(|task| {
                // The FK guarantees a parent exists; a miss here means the
                // store itself is inconsistent.
                let project = by_id.get(&task.project_id).cloned().ok_or_else(|| {
                    StoreError::Internal(format!(
                        "task {} references missing project {}",
                        task.id, task.project_id
                    ))
                })?;
                Ok(TaskWithProject { task, project })
            })
            .collect()
    }
}
