use crate::domain::{
    common::services::Service,
    food_analysis::ports::LLMClient,
    health::{entities::ReadinessStatus, ports::HealthCheckService},
    history::ports::HistoryRepository,
    label::ports::VisionClient,
    storage::ports::ImageStorage,
};

impl<V, LLM, H, IS> HealthCheckService for Service<V, LLM, H, IS>
where
    V: VisionClient,
    LLM: LLMClient,
    H: HistoryRepository,
    IS: ImageStorage,
{
    async fn readiness(&self) -> ReadinessStatus {
        ReadinessStatus {
            history_store: self.history_repository.is_ready().await,
            image_store: self.image_storage.is_ready().await,
        }
    }
}
