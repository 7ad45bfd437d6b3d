use std::path::PathBuf;
use std::sync::Arc;

use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use httpmock::MockServer;
use nutrilens_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tempfile::TempDir;
use test_context::AsyncTestContext;

pub const SHEET_TEXT: &str = "**Food:** Apple\n\n**Calories (per 100g):** about 52 kcal";

/// A running app wired to mocked vision and text APIs and a scratch data
/// directory.
pub struct AppContext {
    pub server: TestServer,
    pub vision: MockServer,
    pub llm: MockServer,
    pub data_dir: TempDir,
}

impl AppContext {
    pub async fn start(extra_args: &[&str]) -> Self {
        let vision = MockServer::start_async().await;
        let llm = MockServer::start_async().await;
        let data_dir = tempfile::tempdir().unwrap();

        let path = |name: &str| data_dir.path().join(name).to_string_lossy().into_owned();
        let vision_url = vision.base_url();
        let llm_url = llm.base_url();
        let upload_dir = path("uploads");
        let sheets_dir = path("sheets");
        let history_file = path("history.json");

        let mut argv = vec![
            "nutrilens",
            "--google-vision-api-key",
            "vision-key",
            "--google-vision-base-url",
            vision_url.as_str(),
            "--openai-api-key",
            "sk-test",
            "--openai-base-url",
            llm_url.as_str(),
            "--upload-dir",
            upload_dir.as_str(),
            "--sheets-dir",
            sheets_dir.as_str(),
            "--history-file",
            history_file.as_str(),
            "--server-root-path",
            "",
        ];
        argv.extend_from_slice(extra_args);

        let args = Arc::new(Args::try_parse_from(argv).unwrap());
        let app = router(state(args).await.unwrap()).unwrap();

        Self {
            server: TestServer::new(app).unwrap(),
            vision,
            llm,
            data_dir,
        }
    }

    pub fn history_file(&self) -> PathBuf {
        self.data_dir.path().join("history.json")
    }

    pub fn sheets_dir(&self) -> PathBuf {
        self.data_dir.path().join("sheets")
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.data_dir.path().join("uploads")
    }
}

impl AsyncTestContext for AppContext {
    async fn setup() -> Self {
        Self::start(&[]).await
    }
}

pub fn upload_form(user: &str, file_name: &str) -> MultipartForm {
    MultipartForm::new().add_text("user", user.to_string()).add_part(
        "image",
        Part::bytes(b"\xff\xd8\xff\xe0 fake jpeg".as_slice())
            .file_name(file_name.to_string())
            .mime_type("image/jpeg"),
    )
}
