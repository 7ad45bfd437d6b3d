mod common;

use axum::http::StatusCode;
use common::{AppContext, SHEET_TEXT, upload_form};
use httpmock::Method;
use serde_json::{Value, json};
use test_context::test_context;

/// Uploads one photo and returns the sheet file name of the new record.
async fn submit(ctx: &AppContext, user: &str) -> String {
    ctx.vision
        .mock_async(|when, then| {
            when.method(Method::POST).path("/v1/images:annotate");
            then.status(200).json_body(json!({
                "responses": [{"labelAnnotations": [{"description": "Apple", "score": 0.92}]}]
            }));
        })
        .await;
    ctx.llm
        .mock_async(|when, then| {
            when.method(Method::POST).path("/v1/chat/completions");
            then.status(200).json_body(json!({
                "choices": [{"message": {"role": "assistant", "content": SHEET_TEXT}}]
            }));
        })
        .await;

    let response = ctx
        .server
        .post("/api/food-analysis/image")
        .multipart(upload_form(user, "apple.jpg"))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    body["data"]["record"]["sheet_file"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_history_is_empty_on_first_run(ctx: &mut AppContext) {
    let response = ctx.server.get("/api/food-analysis/history").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"data": []}));

    let page = ctx.server.get("/history").await;
    assert_eq!(page.status_code(), StatusCode::OK);
    assert!(page.text().contains("No submissions yet"));
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_history_lists_submissions_in_order(ctx: &mut AppContext) {
    submit(ctx, "ana").await;
    submit(ctx, "ben").await;

    let body: Value = ctx.server.get("/api/food-analysis/history").await.json();
    let entries = body["data"].as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["user"], "ana");
    assert_eq!(entries[1]["user"], "ben");
    assert_eq!(entries[0]["sheet_available"], true);
    assert!(
        entries[0]["sheet_html"]
            .as_str()
            .unwrap()
            .contains("<strong>Food:</strong> Apple")
    );
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_history_tolerates_deleted_sheet(ctx: &mut AppContext) {
    let sheet_file = submit(ctx, "ana").await;
    std::fs::remove_file(ctx.sheets_dir().join(&sheet_file)).unwrap();

    let body: Value = ctx.server.get("/api/food-analysis/history").await.json();
    assert_eq!(body["data"][0]["sheet_available"], false);
    assert_eq!(body["data"][0]["sheet_html"], "<p><em>Sheet unavailable</em></p>");

    let page = ctx.server.get("/history").await;
    assert_eq!(page.status_code(), StatusCode::OK);
    assert!(page.text().contains("<em>Sheet unavailable</em>"));
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_download_sheet_as_attachment(ctx: &mut AppContext) {
    let sheet_file = submit(ctx, "ana").await;

    let response = ctx.server.get(&format!("/sheets/{}", sheet_file)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header("content-disposition"),
        format!("attachment; filename=\"{}\"", sheet_file).as_str()
    );
    assert_eq!(response.text(), SHEET_TEXT);
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_download_unknown_sheet_is_not_found(ctx: &mut AppContext) {
    let response = ctx.server.get("/sheets/sheet_missing.txt").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_NOT_FOUND");
    assert_eq!(body["status"], 404);
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_download_rejects_path_traversal(ctx: &mut AppContext) {
    std::fs::write(ctx.history_file(), "[]").unwrap();

    let response = ctx.server.get("/sheets/..%2Fhistory.json").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[test_context(AppContext)]
#[tokio::test]
async fn test_corrupt_log_is_a_server_error(ctx: &mut AppContext) {
    std::fs::write(ctx.history_file(), "{not json").unwrap();

    let response = ctx.server.get("/api/food-analysis/history").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        std::fs::read_to_string(ctx.history_file()).unwrap(),
        "{not json"
    );
}
