//! Route definitions for the `/tasks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET / -> list (each task with its owning project nested inline)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(task::list))
}
