use crate::domain::{
    food_analysis::ports::LLMClient, history::ports::HistoryRepository,
    label::{ports::VisionClient, services::LabelSelector},
    storage::ports::ImageStorage,
};

#[derive(Clone)]
pub struct Service<V, LLM, H, IS>
where
    V: VisionClient,
    LLM: LLMClient,
    H: HistoryRepository,
    IS: ImageStorage,
{
    pub(crate) vision_client: V,
    pub(crate) llm_client: LLM,
    pub(crate) history_repository: H,
    pub(crate) image_storage: IS,
    pub(crate) label_selector: LabelSelector,
}

impl<V, LLM, H, IS> Service<V, LLM, H, IS>
where
    V: VisionClient,
    LLM: LLMClient,
    H: HistoryRepository,
    IS: ImageStorage,
{
    pub fn new(
        vision_client: V,
        llm_client: LLM,
        history_repository: H,
        image_storage: IS,
        label_selector: LabelSelector,
    ) -> Self {
        Self {
            vision_client,
            llm_client,
            history_repository,
            image_storage,
            label_selector,
        }
    }
}
