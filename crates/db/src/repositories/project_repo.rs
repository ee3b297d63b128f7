//! Repository for the `projects` table.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::project::{CreateProject, Project, ProjectWithTasks};
use crate::models::task::Task;
use crate::repositories::TaskRepo;
use crate::types::DbId;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, status, collaborators, created_at, updated_at";

/// Provides read and insert operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> StoreResult<Project> {
        let query = format!(
            "INSERT INTO projects (name, slug, status, collaborators)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.status)
            .bind(&input.collaborators)
            .fetch_one(pool)
            .await?;
        Ok(project)
    }

    /// Insert a batch of projects in a single statement, returning the
    /// created rows in insertion order.
    pub async fn create_many(pool: &PgPool, inputs: &[CreateProject]) -> StoreResult<Vec<Project>> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }
        let mut builder = sqlx::QueryBuilder::new(
            "INSERT INTO projects (name, slug, status, collaborators) ",
        );
        builder.push_values(inputs, |mut row, input| {
            row.push_bind(&input.name)
                .push_bind(&input.slug)
                .push_bind(input.status)
                .push_bind(&input.collaborators);
        });
        builder.push(format!(" RETURNING {COLUMNS}"));
        let projects = builder.build_query_as::<Project>().fetch_all(pool).await?;
        Ok(projects)
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> StoreResult<Option<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(project)
    }

    /// List all projects. Ordered by ID so repeated reads are byte-identical.
    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        let projects = sqlx::query_as::<_, Project>(&query).fetch_all(pool).await?;
        Ok(projects)
    }

    /// List all projects with their tasks nested inline.
    ///
    /// Fetches both collections in full and groups tasks by `project_id` in
    /// memory. Projects and the tasks within each project are ordered by ID.
    pub async fn list_with_tasks(pool: &PgPool) -> StoreResult<Vec<ProjectWithTasks>> {
        let projects = Self::list(pool).await?;
        let tasks = TaskRepo::list(pool).await?;

        let mut grouped: HashMap<DbId, Vec<Task>> = HashMap::new();
        for task in tasks {
            grouped.entry(task.project_id).or_default().push(task);
        }

        Ok(projects
            .into_iter()
            .map(|project| {
                let tasks = grouped.remove(&project.id).unwrap_or_default();
                ProjectWithTasks { project, tasks }
            })
            .collect())
    }
}
