use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct AnalyzeFoodInput {
    pub user: String,
    pub file_name: String,
    pub image_data: Bytes,
}
