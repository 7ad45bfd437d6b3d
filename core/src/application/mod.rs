use std::time::Duration;

use crate::{
    domain::{
        common::{NutrilensConfig, entities::app_errors::CoreError, services::Service},
        label::{policies::DEFAULT_GENERIC_LABELS, services::LabelSelector},
    },
    infrastructure::{
        history::JsonHistoryRepository, llm::OpenAILLMClient, storage::LocalImageStorage,
        vision::GoogleVisionClient,
    },
};

pub type NutrilensService =
    Service<GoogleVisionClient, OpenAILLMClient, JsonHistoryRepository, LocalImageStorage>;

pub async fn create_service(config: NutrilensConfig) -> Result<NutrilensService, CoreError> {
    let label_selector = if config.labels.generic_labels.is_empty() {
        LabelSelector::new(DEFAULT_GENERIC_LABELS, config.labels.penalty)?
    } else {
        LabelSelector::new(&config.labels.generic_labels, config.labels.penalty)?
    };

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
        .map_err(|e| CoreError::InvalidConfiguration(format!("HTTP client: {}", e)))?;

    let vision_client = GoogleVisionClient::new(
        config.vision.api_key,
        config.vision.base_url,
        config.vision.max_results,
        http_client.clone(),
    );

    let llm_client = OpenAILLMClient::new(
        config.llm.openai_api_key,
        config.llm.openai_base_url,
        config.llm.openai_model,
        config.llm.max_tokens,
        http_client,
    );

    let history_repository =
        JsonHistoryRepository::new(config.storage.history_file, config.storage.sheets_dir).await?;
    let image_storage = LocalImageStorage::new(config.storage.upload_dir).await?;

    Ok(Service::new(
        vision_client,
        llm_client,
        history_repository,
        image_storage,
        label_selector,
    ))
}
