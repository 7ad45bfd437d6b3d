use axum::{Router, routing::get};
use utoipa::OpenApi;

use crate::application::http::server::app_state::AppState;

use super::handlers::download_sheet::{__path_download_sheet, download_sheet};

#[derive(OpenApi)]
#[openapi(paths(download_sheet))]
pub struct FileApiDoc;

pub fn file_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/sheets/{{file_name}}", state.args.server.root_path),
        get(download_sheet),
    )
}
