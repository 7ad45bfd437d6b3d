use super::handlers::{
    analyze_food_image::{__path_analyze_food_image, analyze_food_image},
    get_analysis_history::{__path_get_analysis_history, get_analysis_history},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_food_image, get_analysis_history))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/food-analysis/image", state.args.server.root_path),
            post(analyze_food_image),
        )
        .route(
            &format!("{}/api/food-analysis/history", state.args.server.root_path),
            get(get_analysis_history),
        )
}
