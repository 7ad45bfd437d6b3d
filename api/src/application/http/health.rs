use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
    routing::get,
};
use nutrilens_core::domain::health::{entities::ReadinessStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LivenessResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(paths(live, ready))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse)
    ),
)]
pub async fn live() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Reports whether the history and image directories are usable",
    responses(
        (status = 200, body = ReadinessStatus),
        (status = 503, body = ReadinessStatus)
    ),
)]
pub async fn ready(State(state): State<AppState>) -> AxumResponse {
    let status = state.service.readiness().await;

    if status.is_ready() {
        (StatusCode::OK, Json(status)).into_response()
    } else {
        tracing::warn!(?status, "service not ready");
        (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response()
    }
}

pub fn health_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/health/live", root_path), get(live))
        .route(&format!("{}/health/ready", root_path), get(ready))
}
