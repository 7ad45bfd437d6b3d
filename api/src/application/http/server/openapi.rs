use crate::application::http::{
    file::router::FileApiDoc,
    food_analysis::router::FoodAnalysisApiDoc,
    health::HealthApiDoc,
    server::config::{__path_get_config, get_config},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriLens API"
    ),
    paths(get_config),
    nest(
        (path = "/api/food-analysis", api = FoodAnalysisApiDoc),
        (path = "/sheets", api = FileApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
