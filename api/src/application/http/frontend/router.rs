use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    api_index::{__path_api_index, api_index},
    root::{__path_root, root},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(root, api_index))]
pub struct MetaApiDoc;

pub fn meta_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/api", get(api_index))
}
