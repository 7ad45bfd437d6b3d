use axum::extract::Multipart;
use bytes::Bytes;
use nutrilens_core::domain::food_analysis::value_objects::AnalyzeFoodInput;
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Multipart body shared by the HTML form and the JSON endpoint.
#[derive(Debug, Validate)]
pub struct UploadForm {
    #[validate(length(min = 1, max = 100, message = "user must be between 1 and 100 characters"))]
    pub user: String,
    pub image: Bytes,
    pub file_name: String,
}

/// OpenAPI shape of the `multipart/form-data` upload.
#[derive(Debug, ToSchema)]
pub struct UploadRequest {
    pub user: String,
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

impl From<UploadForm> for AnalyzeFoodInput {
    fn from(form: UploadForm) -> Self {
        Self {
            user: form.user,
            file_name: form.file_name,
            image_data: form.image,
        }
    }
}

/// Reads the `user` and `image` fields. Unknown fields are ignored.
pub async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let mut user: Option<String> = None;
    let mut image: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Failed to read multipart field: {}", e);
        ApiError::from(e)
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "user" => {
                user = Some(field.text().await?.trim().to_string());
            }
            "image" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await?;
                image = Some((file_name, data));
            }
            _ => {}
        }
    }

    let user = user
        .filter(|user| !user.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing data: user is required".to_string()))?;

    let (file_name, image) = image
        .filter(|(_, data)| !data.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing data: image is required".to_string()))?;

    let form = UploadForm {
        user,
        image,
        file_name,
    };
    form.validate()?;

    Ok(form)
}
