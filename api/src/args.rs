use std::path::PathBuf;

use clap::Parser;
use nutrilens_core::{
    domain::common::{LLMConfig, LabelConfig, NutrilensConfig, StorageConfig, VisionConfig},
    infrastructure::{
        llm::openai_client::{DEFAULT_MAX_TOKENS, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL},
        vision::google_vision_client::DEFAULT_VISION_BASE_URL,
    },
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrilens", version, about = "Food photo nutrition sheets")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub log: LogArgs,
    #[command(flatten)]
    pub storage: StorageArgs,
    #[command(flatten)]
    pub vision: VisionArgs,
    #[command(flatten)]
    pub llm: LlmArgs,
    #[command(flatten)]
    pub labels: LabelArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5000"
    )]
    pub allowed_origins: Vec<String>,
    #[arg(long = "max-upload-bytes", env = "MAX_UPLOAD_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,
    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long = "upload-dir", env = "UPLOAD_DIR", default_value = "static/uploads")]
    pub upload_dir: PathBuf,
    #[arg(long = "sheets-dir", env = "SHEETS_DIR", default_value = "sheets")]
    pub sheets_dir: PathBuf,
    #[arg(long = "history-file", env = "HISTORY_FILE", default_value = "history.json")]
    pub history_file: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct VisionArgs {
    #[arg(long = "google-vision-api-key", env = "GOOGLE_VISION_API_KEY", hide_env_values = true)]
    pub api_key: String,
    #[arg(long = "google-vision-base-url", env = "GOOGLE_VISION_BASE_URL", default_value = DEFAULT_VISION_BASE_URL)]
    pub base_url: String,
    #[arg(long = "google-vision-max-results", env = "GOOGLE_VISION_MAX_RESULTS", default_value_t = 10)]
    pub max_results: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,
    #[arg(long = "openai-base-url", env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_BASE_URL)]
    pub openai_base_url: String,
    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = DEFAULT_OPENAI_MODEL)]
    pub openai_model: String,
    #[arg(long = "openai-max-tokens", env = "OPENAI_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,
    #[arg(long = "http-timeout-secs", env = "HTTP_TIMEOUT_SECS", default_value_t = 60)]
    pub http_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LabelArgs {
    /// Comma separated. Leave empty for the built-in list.
    #[arg(long = "generic-labels", env = "GENERIC_LABELS", value_delimiter = ',')]
    pub generic_labels: Vec<String>,
    #[arg(long = "generic-label-penalty", env = "GENERIC_LABEL_PENALTY", default_value_t = 0.6)]
    pub penalty: f32,
}

impl From<Args> for NutrilensConfig {
    fn from(args: Args) -> Self {
        Self {
            storage: StorageConfig {
                upload_dir: args.storage.upload_dir,
                sheets_dir: args.storage.sheets_dir,
                history_file: args.storage.history_file,
            },
            vision: VisionConfig {
                api_key: args.vision.api_key,
                base_url: args.vision.base_url,
                max_results: args.vision.max_results,
            },
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_base_url: args.llm.openai_base_url,
                openai_model: args.llm.openai_model,
                max_tokens: args.llm.max_tokens,
            },
            labels: LabelConfig {
                generic_labels: args
                    .labels
                    .generic_labels
                    .into_iter()
                    .map(|label| label.trim().to_string())
                    .filter(|label| !label.is_empty())
                    .collect(),
                penalty: args.labels.penalty,
            },
            http_timeout_secs: args.llm.http_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 5] = [
        "nutrilens",
        "--google-vision-api-key",
        "vision-key",
        "--openai-api-key",
        "sk-test",
    ];

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(REQUIRED).unwrap();

        assert_eq!(args.server.port, 5000);
        assert_eq!(args.server.root_path, "");
        assert_eq!(args.server.allowed_origins, vec!["http://localhost:5000"]);
        assert_eq!(args.server.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(args.storage.history_file, PathBuf::from("history.json"));

        let config = NutrilensConfig::from(args);
        assert_eq!(config.llm.openai_model, "gpt-3.5-turbo");
        assert_eq!(config.llm.max_tokens, 350);
        assert_eq!(config.vision.max_results, 10);
        assert_eq!(config.http_timeout_secs, 60);
        assert!(config.labels.generic_labels.is_empty());
        assert_eq!(config.labels.penalty, 0.6);
    }

    #[test]
    fn test_generic_labels_are_split_and_trimmed() {
        let mut argv = REQUIRED.to_vec();
        argv.extend(["--generic-labels", "Food, Dish,,Plate "]);

        let config = NutrilensConfig::from(Args::try_parse_from(argv).unwrap());
        assert_eq!(config.labels.generic_labels, vec!["Food", "Dish", "Plate"]);
    }

    #[test]
    fn test_api_keys_are_required() {
        assert!(Args::try_parse_from(["nutrilens"]).is_err());
    }
}
