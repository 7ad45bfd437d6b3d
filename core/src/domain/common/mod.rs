use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod entities;
pub mod markdown;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutrilensConfig {
    pub storage: StorageConfig,
    pub vision: VisionConfig,
    pub llm: LLMConfig,
    pub labels: LabelConfig,
    pub http_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub sheets_dir: PathBuf,
    pub history_file: PathBuf,
}

#[derive(Clone, Debug)]
pub struct VisionConfig {
    pub api_key: String,
    pub base_url: String,
    pub max_results: u32,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub max_tokens: u32,
}

#[derive(Clone, Debug)]
pub struct LabelConfig {
    /// Empty means the built-in generic term list.
    pub generic_labels: Vec<String>,
    pub penalty: f32,
}

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Time-ordered identifier for records and stored files.
pub fn generate_uuid_v7() -> Uuid {
    Uuid::now_v7()
}
