use axum::extract::{Multipart, State, multipart::MultipartRejection};
use nesventory_gemini_core::domain::identification::{
    entities::DataTagResult, ports::IdentificationService,
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
    path = "/parse-data-tag",
    tag = "identification",
    summary = "Parse a product data tag",
    description = "Extracts manufacturer, brand, model, serial number and other label information from a photo of a product data tag.",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = DataTagResult),
        (status = 400, description = "Invalid, empty or undecodable file", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Gemini call failed (PARSE_ERROR)", body = ErrorResponse),
        (status = 503, description = "Gemini is not configured", body = ErrorResponse)
    ),
)]
pub async fn parse_data_tag(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<DataTagResult>, ApiError> {
    let upload = read_upload(multipart?).await?;

    let result = state
        .service
        .parse_data_tag(upload)
        .await
        .map_err(|e| {
            error!(error = %e, "Data tag parsing failed");
            ApiError::from_data_tag(e)
        })?;

    Ok(Response::OK(result))
}
