use std::sync::Arc;

use minijinja::Environment;
use nutrilens_core::application::NutrilensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutrilensService,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutrilensService, templates: Environment<'static>) -> Self {
        Self {
            args,
            service,
            templates: Arc::new(templates),
        }
    }
}
