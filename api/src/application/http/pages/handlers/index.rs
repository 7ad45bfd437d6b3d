use axum::{extract::State, response::Html};
use minijinja::context;

use crate::application::http::{
    pages::templates::{INDEX_TEMPLATE, render_page},
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_page(
        &state.templates,
        INDEX_TEMPLATE,
        context! { root_path => state.args.server.root_path },
    )
}
