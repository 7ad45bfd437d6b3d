use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, markdown::render_markdown, services::Service},
    food_analysis::{
        entities::FoodAnalysis,
        ports::{FoodAnalysisService, LLMClient},
        prompt::{SHEET_FALLBACK_TEXT, SYSTEM_PROMPT, build_sheet_prompt},
        value_objects::AnalyzeFoodInput,
    },
    history::{ports::HistoryRepository, value_objects::AppendHistoryInput},
    label::{entities::DetectedFood, ports::VisionClient},
    storage::{policies::ensure_allowed_image, ports::ImageStorage},
};

impl<V, LLM, H, IS> FoodAnalysisService for Service<V, LLM, H, IS>
where
    V: VisionClient,
    LLM: LLMClient,
    H: HistoryRepository,
    IS: ImageStorage,
{
    #[instrument(skip(self, input), fields(user = %input.user, file_name = %input.file_name))]
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> Result<FoodAnalysis, CoreError> {
        // 1. Validate the upload, nothing has been written yet
        let user = input.user.trim().to_string();
        if user.is_empty() {
            return Err(CoreError::MissingField("user".to_string()));
        }

        if input.image_data.is_empty() {
            return Err(CoreError::MissingField("image".to_string()));
        }

        ensure_allowed_image(&input.file_name)?;

        // 2. Keep a copy of the image
        let stored_image = self
            .image_storage
            .save_image(&input.file_name, input.image_data.clone())
            .await?;

        // 3. Identify the food
        let detected = match self
            .vision_client
            .detect_labels(input.image_data.to_vec())
            .await
        {
            Ok(candidates) => self.label_selector.select(&candidates),
            Err(e) => {
                tracing::warn!(error = %e, "Label detection failed");
                DetectedFood::DetectionFailed(e.to_string())
            }
        };
        let food_label = detected.label();

        // 4. Generate the nutrition sheet
        let sheet_text = match self
            .llm_client
            .generate_text(SYSTEM_PROMPT.to_string(), build_sheet_prompt(&food_label))
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, food_label = %food_label, "Sheet generation failed");
                SHEET_FALLBACK_TEXT.to_string()
            }
        };
        let sheet_html = render_markdown(&sheet_text);

        // 5. Record the submission
        let record = self
            .history_repository
            .append(AppendHistoryInput {
                user,
                food_label,
                sheet_text,
                image_reference: Some(stored_image.reference),
            })
            .await?;

        tracing::info!(
            record_id = %record.id,
            food_label = %record.food_label,
            "Food analysis recorded"
        );

        Ok(FoodAnalysis {
            record,
            detected,
            sheet_html,
        })
    }
}
