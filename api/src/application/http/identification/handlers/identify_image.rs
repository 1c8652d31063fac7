use axum::extract::{Multipart, State, multipart::MultipartRejection};
use nesventory_gemini_core::domain::identification::{
    entities::IdentificationResult, ports::IdentificationService,
};
use tracing::error;

use crate::application::http::{
    identification::{multipart::read_upload, validators::ImageUploadForm},
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/nesventory/identify/image",
    tag = "identification",
    summary = "Identify collectibles in an image",
    description = "Sends the uploaded image to Gemini and returns every Department 56 item it recognizes with details and estimated values.",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = IdentificationResult),
        (status = 400, description = "Invalid, empty or undecodable file", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Gemini call failed", body = ErrorResponse),
        (status = 503, description = "Gemini is not configured", body = ErrorResponse)
    ),
)]
pub async fn identify_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<IdentificationResult>, ApiError> {
    let upload = read_upload(multipart?).await?;

    let result = state
        .service
        .identify_items(upload)
        .await
        .map_err(|e| {
            error!(error = %e, "Image identification failed");
            ApiError::from(e)
        })?;

    Ok(Response::OK(result))
}
