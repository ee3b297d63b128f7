//! Handlers for the `/tasks` resource.

use axum::extract::State;
use axum::Json;
use taskboard_db::models::task::TaskWithProject;
use taskboard_db::repositories::TaskRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /tasks
///
/// Returns every task with its owning project nested inline, ordered by ID.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TaskWithProject>>> {
    let tasks = TaskRepo::list_with_projects(&state.pool).await?;
    Ok(Json(tasks))
}
