use axum::extract::State;
use nesventory_gemini_core::domain::identification::{
    entities::BarcodeResult, ports::IdentificationService, value_objects::BarcodeQuery,
};
use tracing::error;

use crate::application::http::{
    identification::validators::BarcodeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/lookup-barcode",
    tag = "identification",
    summary = "Look up a product by barcode",
    description = "Asks Gemini what it knows about a barcode or UPC. The answer comes from the model's own knowledge, not a barcode database.",
    request_body = BarcodeRequest,
    responses(
        (status = 200, body = BarcodeResult),
        (status = 400, description = "Malformed request or blank code", body = ErrorResponse),
        (status = 500, description = "Gemini call failed (LOOKUP_ERROR)", body = ErrorResponse),
        (status = 503, description = "Gemini is not configured", body = ErrorResponse)
    ),
)]
pub async fn lookup_barcode(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<BarcodeRequest>,
) -> Result<Response<BarcodeResult>, ApiError> {
    let result = state
        .service
        .lookup_barcode(BarcodeQuery {
            barcode: payload.barcode,
            upc: payload.upc,
        })
        .await
        .map_err(|e| {
            error!(error = %e, "Barcode lookup failed");
            ApiError::from_barcode_lookup(e)
        })?;

    Ok(Response::OK(result))
}
