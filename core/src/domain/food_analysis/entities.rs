use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{history::entities::HistoryRecord, label::entities::DetectedFood};

/// Outcome of analysing one uploaded photograph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodAnalysis {
    pub record: HistoryRecord,
    pub detected: DetectedFood,
    pub sheet_html: String,
}
