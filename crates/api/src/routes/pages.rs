//! Static page routes for the SPA shell.
//!
//! The built frontend resolves its own page routes (`/`, `/projects`)
//! client-side; the server's job is to hand out `index.html` for any path
//! the API does not claim, plus the asset bundle. Files are read from disk
//! per request, nothing is preloaded.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ServerConfig;
use crate::state::AppState;

/// Asset directory plus history-mode fallback to the shell.
pub fn router(config: &ServerConfig) -> Router<AppState> {
    let index = ServeFile::new(config.static_dir.join("index.html"));
    let assets = ServeDir::new(config.static_dir.join("assets"));

    Router::new()
        .nest_service("/assets", assets)
        .fallback_service(index)
}
