use axum::{
    extract::{Multipart, State},
    response::Html,
};
use minijinja::context;
use nutrilens_core::domain::food_analysis::ports::FoodAnalysisService;

use crate::application::http::{
    food_analysis::validators::read_upload_form,
    pages::templates::{RESULT_TEMPLATE, render_page},
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

/// Form target of the upload page. Errors come back as JSON, like the API.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let form = read_upload_form(multipart).await?;

    let analysis = state
        .service
        .analyze_food(form.into())
        .await
        .map_err(ApiError::from)?;

    let root_path = &state.args.server.root_path;
    let record = analysis.record;

    render_page(
        &state.templates,
        RESULT_TEMPLATE,
        context! {
            root_path,
            user => record.user,
            food_label => record.food_label,
            sheet_html => analysis.sheet_html,
            image_url => record.image_reference.map(|r| format!("{}/{}", root_path, r)),
            sheet_url => format!("{}/sheets/{}", root_path, record.sheet_file),
        },
    )
}
