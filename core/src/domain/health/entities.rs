use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReadinessStatus {
    pub history_store: bool,
    pub image_store: bool,
}

impl ReadinessStatus {
    pub fn is_ready(&self) -> bool {
        self.history_store && self.image_store
    }
}
