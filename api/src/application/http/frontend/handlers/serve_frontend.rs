use axum::{
    extract::State,
    http::{Method, Uri},
    response::Html,
};

use super::read_index;
use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Paths under these prefixes are never answered with the frontend, even when
/// no route matched beneath them.
pub const API_PREFIXES: [&str; 8] = [
    "health",
    "nesventory",
    "parse-data-tag",
    "lookup-barcode",
    "docs",
    "redoc",
    "openapi.json",
    "api",
];

pub fn is_api_path(path: &str) -> bool {
    let path = path.trim_start_matches('/');
    API_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Catch-all for client-side routing. Registered as the router fallback so
/// every specific route is matched first.
pub async fn serve_frontend(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    if method != Method::GET || is_api_path(uri.path()) {
        return Err(ApiError::NotFound("Not found".to_string()));
    }

    read_index(&state.args.server.dist_path)
        .await?
        .ok_or(ApiError::FrontendNotBuilt)
}
