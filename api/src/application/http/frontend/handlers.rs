pub mod api_index;
pub mod root;
pub mod serve_frontend;

use std::path::Path;

use axum::response::Html;
use tracing::error;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const INDEX_FILE: &str = "index.html";

/// Reads `<dist>/index.html`. `Ok(None)` means the bundle was not built.
pub async fn read_index(dist_path: &Path) -> Result<Option<Html<String>>, ApiError> {
    let index_path = dist_path.join(INDEX_FILE);

    if !tokio::fs::try_exists(&index_path).await.unwrap_or(false) {
        return Ok(None);
    }

    tokio::fs::read_to_string(&index_path)
        .await
        .map(|html| Some(Html(html)))
        .map_err(|e| {
            error!(path = %index_path.display(), "Failed to read frontend index: {}", e);
            ApiError::InternalServerError(format!("failed to read frontend index: {}", e))
        })
}
