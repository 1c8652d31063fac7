use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::{
    handlers::{
        identify_image::{__path_identify_image, identify_image},
        lookup_barcode::{__path_lookup_barcode, lookup_barcode},
        parse_data_tag::{__path_parse_data_tag, parse_data_tag},
    },
    multipart::MAX_UPLOAD_SIZE,
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(identify_image, parse_data_tag, lookup_barcode))]
pub struct IdentificationApiDoc;

pub fn identification_routes() -> Router<AppState> {
    Router::new()
        .route("/nesventory/identify/image", post(identify_image))
        .route("/parse-data-tag", post(parse_data_tag))
        .route("/lookup-barcode", post(lookup_barcode))
        // Multipart overhead on top of the file itself
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + 64 * 1024))
}
