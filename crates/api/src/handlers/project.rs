//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::Json;
use taskboard_db::models::project::ProjectWithTasks;
use taskboard_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /projects
///
/// Returns every project with its tasks nested inline, ordered by ID.
/// No filtering, paging, or sorting parameters are accepted.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithTasks>>> {
    let projects = ProjectRepo::list_with_tasks(&state.pool).await?;
    Ok(Json(projects))
}
