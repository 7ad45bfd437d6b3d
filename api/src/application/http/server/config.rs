use axum::extract::State;
use nutrilens_core::domain::storage::policies::ALLOWED_IMAGE_EXTENSIONS;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

/// Settings a client may rely on. Secrets never appear here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub app_version: String,
    pub root_path: String,
    pub allowed_extensions: Vec<String>,
    pub max_upload_bytes: usize,
    pub openai_model: String,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Public configuration",
    responses(
        (status = 200, body = ConfigResponse)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    Response::OK(ConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
        allowed_extensions: ALLOWED_IMAGE_EXTENSIONS
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect(),
        max_upload_bytes: state.args.server.max_upload_bytes,
        openai_model: state.args.llm.openai_model.clone(),
    })
}
