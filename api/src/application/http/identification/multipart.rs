use axum::extract::Multipart;
use nesventory_gemini_core::domain::identification::value_objects::UploadedFile;
use tracing::error;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const FILE_FIELD: &str = "file";

/// Largest accepted upload; Gemini rejects inline requests above ~20 MB.
pub const MAX_UPLOAD_SIZE: usize = 20 * 1024 * 1024;

/// Reads the `file` field of a multipart form. Other fields are ignored.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadedFile, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::from(e)
    })? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read file bytes: {}", e);
            ApiError::from(e)
        })?;

        return Ok(UploadedFile {
            file_name,
            content_type,
            data: data.to_vec(),
        });
    }

    Err(ApiError::MissingFile)
}
