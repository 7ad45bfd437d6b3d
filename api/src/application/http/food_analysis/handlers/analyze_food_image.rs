use axum::extract::{Multipart, State};
use nutrilens_core::domain::food_analysis::{
    entities::FoodAnalysis, ports::FoodAnalysisService,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_analysis::validators::{UploadRequest, read_upload_form},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeFoodResponse {
    pub data: FoodAnalysis,
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "food-analysis",
    summary = "Analyze a food photo",
    description = "Detects the food in the photo, generates a nutrition sheet and records the submission. Accepts .png, .jpg and .jpeg.",
    request_body(content = UploadRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, body = AnalyzeFoodResponse),
        (status = 400, description = "Missing field or image format not allowed"),
        (status = 413, description = "Image too large")
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let form = read_upload_form(multipart).await?;

    let analysis = state
        .service
        .analyze_food(form.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AnalyzeFoodResponse { data: analysis }))
}
