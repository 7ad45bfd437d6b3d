use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NO_FOOD_DETECTED: &str = "No food detected";

/// One label annotation returned by the vision API for an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabelCandidate {
    pub description: String,
    pub confidence: f32,
}

impl LabelCandidate {
    pub fn new(description: impl Into<String>, confidence: f32) -> Self {
        Self {
            description: description.into(),
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DetectedFood {
    Label(String),
    NoFoodDetected,
    DetectionFailed(String),
}

impl DetectedFood {
    /// The string handed to the text generator and stored in history.
    /// A failed detection still yields a label so the sheet step can run.
    pub fn label(&self) -> String {
        match self {
            DetectedFood::Label(description) => description.clone(),
            DetectedFood::NoFoodDetected => NO_FOOD_DETECTED.to_string(),
            DetectedFood::DetectionFailed(message) => format!("Error: {}", message),
        }
    }

    pub fn is_detected(&self) -> bool {
        matches!(self, DetectedFood::Label(_))
    }
}
