use axum::{
    Router,
    routing::{get, post},
};

use crate::application::http::server::app_state::AppState;

use super::handlers::{history::history, index::index, upload::upload};

/// Browser facing pages. Not part of the OpenAPI document.
pub fn page_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/", root_path), get(index))
        .route(&format!("{}/upload", root_path), post(upload))
        .route(&format!("{}/history", root_path), get(history))
}
