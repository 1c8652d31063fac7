use std::sync::Arc;

use nesventory_gemini_core::domain::identification::services::Service;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Service,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: Service) -> Self {
        Self { args, service }
    }
}
