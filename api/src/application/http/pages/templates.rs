use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const RESULT_TEMPLATE: &str = "result.html";
pub const HISTORY_TEMPLATE: &str = "history.html";

/// Loads the page templates compiled into the binary. Names ending in
/// `.html` are auto-escaped.
pub fn build_templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("base.html", include_str!("../../../../templates/base.html"))?;
    env.add_template(INDEX_TEMPLATE, include_str!("../../../../templates/index.html"))?;
    env.add_template(RESULT_TEMPLATE, include_str!("../../../../templates/result.html"))?;
    env.add_template(HISTORY_TEMPLATE, include_str!("../../../../templates/history.html"))?;
    Ok(env)
}

pub fn render_page<S: Serialize>(
    templates: &Environment<'static>,
    name: &str,
    context: S,
) -> Result<Html<String>, ApiError> {
    templates
        .get_template(name)
        .and_then(|template| template.render(context))
        .map(Html)
        .map_err(|e| ApiError::InternalServerError(format!("template {}: {}", name, e)))
}
