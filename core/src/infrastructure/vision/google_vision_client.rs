use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    label::{entities::LabelCandidate, ports::VisionClient},
};

pub const DEFAULT_VISION_BASE_URL: &str = "https://vision.googleapis.com";

#[derive(Debug, Clone)]
pub struct GoogleVisionClient {
    api_key: String,
    base_url: String,
    max_results: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
struct AnnotateImageRequest {
    image: Image,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct Image {
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    feature_type: String,
    max_results: u32,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    label_annotations: Vec<EntityAnnotation>,
    error: Option<Status>,
}

#[derive(Debug, Deserialize)]
struct EntityAnnotation {
    description: String,
    #[serde(default)]
    score: f32,
}

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

impl GoogleVisionClient {
    pub fn new(api_key: String, base_url: String, max_results: u32, client: Client) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_results,
            client,
        }
    }

    async fn call_vision_api(&self, request: AnnotateRequest) -> Result<AnnotateResponse, CoreError> {
        let url = format!("{}/v1/images:annotate", self.base_url);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Vision API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Vision API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Vision API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Vision API returned error: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Vision response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse Vision response: {}", e))
        })
    }
}

impl VisionClient for GoogleVisionClient {
    async fn detect_labels(&self, image_data: Vec<u8>) -> Result<Vec<LabelCandidate>, CoreError> {
        let request = AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: Image {
                    content: general_purpose::STANDARD.encode(&image_data),
                },
                features: vec![Feature {
                    feature_type: "LABEL_DETECTION".to_string(),
                    max_results: self.max_results,
                }],
            }],
        };

        let response = self.call_vision_api(request).await?;

        let Some(image_response) = response.responses.into_iter().next() else {
            return Ok(Vec::new());
        };

        if let Some(status) = image_response.error {
            tracing::error!(code = status.code, "Vision API rejected image: {}", status.message);
            return Err(CoreError::ExternalServiceError(format!(
                "Vision API rejected image: {}",
                status.message
            )));
        }

        let labels = image_response
            .label_annotations
            .into_iter()
            .map(|annotation| LabelCandidate::new(annotation.description, annotation.score))
            .collect::<Vec<_>>();

        tracing::debug!(count = labels.len(), "Received label annotations");

        Ok(labels)
    }
}
