use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Multipart form accepted by the image routes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImageUploadForm {
    /// Image file (JPEG, PNG, WebP, GIF, BMP or TIFF)
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct BarcodeRequest {
    /// Barcode value
    #[schema(example = "012345678905")]
    #[validate(length(max = 128, message = "barcode must be at most 128 characters"))]
    pub barcode: String,
    /// UPC value, used when `barcode` is blank
    #[validate(length(max = 128, message = "upc must be at most 128 characters"))]
    pub upc: Option<String>,
}
