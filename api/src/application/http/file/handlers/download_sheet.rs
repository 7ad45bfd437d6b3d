use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response as AxumResponse},
};
use nutrilens_core::domain::history::ports::HistoryService;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/{file_name}",
    tag = "file",
    summary = "Download a nutrition sheet",
    description = "Returns the raw Markdown text of a stored sheet as an attachment",
    responses(
        (status = 200, description = "Sheet content", content_type = "text/plain"),
        (status = 400, description = "Invalid file name"),
        (status = 404, description = "File not found")
    ),
    params(
        ("file_name" = String, Path, description = "Sheet file name, e.g. sheet_<id>.txt"),
    ),
)]
pub async fn download_sheet(
    Path(file_name): Path<String>,
    State(state): State<AppState>,
) -> Result<AxumResponse, ApiError> {
    let download = state
        .service
        .download_sheet(file_name)
        .await
        .map_err(ApiError::from)?;

    let disposition = format!("attachment; filename=\"{}\"", download.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.content,
    )
        .into_response())
}
