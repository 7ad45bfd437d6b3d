use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_timestamp, generate_uuid_v7};

pub const SHEET_UNAVAILABLE_HTML: &str = "<p><em>Sheet unavailable</em></p>";

/// One past submission, as persisted in the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub user: String,
    pub food_label: String,
    pub sheet_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn new(user: String, food_label: String, image_reference: Option<String>) -> Self {
        let id = generate_uuid_v7();

        Self {
            id,
            user,
            food_label,
            sheet_file: sheet_file_name(&id),
            image_reference,
            created_at: generate_timestamp(),
        }
    }
}

pub fn sheet_file_name(id: &Uuid) -> String {
    format!("sheet_{}.txt", id.simple())
}

/// A history record together with its rendered nutrition sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub record: HistoryRecord,
    pub sheet_html: String,
    pub sheet_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SheetDownload {
    pub file_name: String,
    pub content: String,
}
