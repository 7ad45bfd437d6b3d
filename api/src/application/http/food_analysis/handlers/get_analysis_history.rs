use axum::extract::State;
use nutrilens_core::domain::history::{entities::HistoryEntry, ports::HistoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAnalysisHistoryResponse {
    pub data: Vec<HistoryEntry>,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "food-analysis",
    summary = "Get submission history",
    description = "Every recorded submission in insertion order, with its rendered nutrition sheet",
    responses(
        (status = 200, body = GetAnalysisHistoryResponse)
    ),
)]
pub async fn get_analysis_history(
    State(state): State<AppState>,
) -> Result<Response<GetAnalysisHistoryResponse>, ApiError> {
    let entries = state
        .service
        .list_history()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAnalysisHistoryResponse { data: entries }))
}
