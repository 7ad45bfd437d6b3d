#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendHistoryInput {
    pub user: String,
    pub food_label: String,
    pub sheet_text: String,
    pub image_reference: Option<String>,
}
