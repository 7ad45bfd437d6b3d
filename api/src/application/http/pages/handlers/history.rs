use axum::{extract::State, response::Html};
use minijinja::context;
use nutrilens_core::domain::history::{entities::HistoryEntry, ports::HistoryService};
use serde::Serialize;

use crate::application::http::{
    pages::templates::{HISTORY_TEMPLATE, render_page},
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

#[derive(Debug, Serialize)]
struct HistoryItemView {
    user: String,
    food_label: String,
    created_at: String,
    sheet_html: String,
    sheet_available: bool,
    sheet_url: String,
    image_url: Option<String>,
}

impl HistoryItemView {
    fn new(entry: HistoryEntry, root_path: &str) -> Self {
        let record = entry.record;

        Self {
            created_at: record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            sheet_url: format!("{}/sheets/{}", root_path, record.sheet_file),
            image_url: record
                .image_reference
                .map(|reference| format!("{}/{}", root_path, reference)),
            user: record.user,
            food_label: record.food_label,
            sheet_html: entry.sheet_html,
            sheet_available: entry.sheet_available,
        }
    }
}

pub async fn history(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let root_path = &state.args.server.root_path;

    let entries = state
        .service
        .list_history()
        .await
        .map_err(ApiError::from)?
        .into_iter()
        .map(|entry| HistoryItemView::new(entry, root_path))
        .collect::<Vec<_>>();

    render_page(
        &state.templates,
        HISTORY_TEMPLATE,
        context! { root_path, entries },
    )
}
