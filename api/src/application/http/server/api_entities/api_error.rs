use axum::{
    Json,
    extract::{
        FromRequest, Request,
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nesventory_gemini_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Error body shared by every route: `{"detail": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Short error label
    #[schema(example = "Service unavailable")]
    pub error: String,
    /// Human-readable explanation
    pub message: String,
    /// Stable machine-readable code
    #[schema(example = "GEMINI_NOT_CONFIGURED")]
    pub error_code: String,
}

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Gemini AI is not configured. Please set GEMINI_API_KEY environment variable.")]
    NotConfigured,

    #[error("File type '{0}' is not supported. Only image files are accepted.")]
    InvalidFileType(String),

    #[error("The uploaded file is empty")]
    EmptyFile,

    #[error("Unable to process image: {0}")]
    InvalidImageData(String),

    #[error("Multipart field 'file' is required")]
    MissingFile,

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Either 'barcode' or 'upc' must be provided")]
    InvalidBarcode,

    #[error("{0}")]
    BadRequest(String),

    #[error("Failed to process request with Gemini: {0}")]
    AiProcessingFailed(String),

    #[error("Failed to parse data tag with Gemini: {0}")]
    ParseFailed(String),

    #[error("Failed to look up barcode with Gemini: {0}")]
    LookupFailed(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Frontend not built")]
    FrontendNotBuilt,

    #[error("An unexpected error occurred: {0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InvalidFileType(_)
            | ApiError::EmptyFile
            | ApiError::InvalidImageData(_)
            | ApiError::MissingFile
            | ApiError::InvalidBarcode
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound(_) | ApiError::FrontendNotBuilt => StatusCode::NOT_FOUND,
            ApiError::AiProcessingFailed(_)
            | ApiError::ParseFailed(_)
            | ApiError::LookupFailed(_)
            | ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApiError::NotConfigured => "Service unavailable",
            ApiError::InvalidFileType(_) => "Invalid file type",
            ApiError::EmptyFile => "Empty file",
            ApiError::InvalidImageData(_) => "Invalid image data",
            ApiError::MissingFile => "Missing file",
            ApiError::PayloadTooLarge(_) => "File too large",
            ApiError::InvalidBarcode => "Invalid barcode",
            ApiError::BadRequest(_) => "Invalid request",
            ApiError::AiProcessingFailed(_) => "AI processing failed",
            ApiError::ParseFailed(_) => "Parsing failed",
            ApiError::LookupFailed(_) => "Lookup failed",
            ApiError::NotFound(_) => "Not found",
            ApiError::FrontendNotBuilt => "Frontend not built",
            ApiError::InternalServerError(_) => "Unexpected error",
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotConfigured => "GEMINI_NOT_CONFIGURED",
            ApiError::InvalidFileType(_) => "INVALID_FILE_TYPE",
            ApiError::EmptyFile => "EMPTY_FILE",
            ApiError::InvalidImageData(_) => "INVALID_IMAGE_DATA",
            ApiError::MissingFile => "MISSING_FILE",
            ApiError::PayloadTooLarge(_) => "FILE_TOO_LARGE",
            ApiError::InvalidBarcode => "INVALID_BARCODE",
            ApiError::BadRequest(_) => "INVALID_REQUEST",
            ApiError::AiProcessingFailed(_) => "GEMINI_API_ERROR",
            ApiError::ParseFailed(_) => "PARSE_ERROR",
            ApiError::LookupFailed(_) => "LOOKUP_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::FrontendNotBuilt => "FRONTEND_NOT_BUILT",
            ApiError::InternalServerError(_) => "UNEXPECTED_ERROR",
        }
    }

    pub fn to_body(&self) -> ErrorResponse {
        ErrorResponse {
            detail: ErrorDetail {
                error: self.label().to_string(),
                message: self.to_string(),
                error_code: self.error_code().to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_body())).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotConfigured => ApiError::NotConfigured,
            CoreError::InvalidFileType(content_type) => ApiError::InvalidFileType(content_type),
            CoreError::EmptyFile => ApiError::EmptyFile,
            CoreError::InvalidImageData(reason) => ApiError::InvalidImageData(reason),
            CoreError::InvalidBarcode => ApiError::InvalidBarcode,
            CoreError::ExternalServiceError(reason) => ApiError::AiProcessingFailed(reason),
        }
    }
}

impl ApiError {
    /// Maps a data tag failure; upstream errors report `PARSE_ERROR`.
    pub fn from_data_tag(error: CoreError) -> Self {
        match error {
            CoreError::ExternalServiceError(reason) => ApiError::ParseFailed(reason),
            other => ApiError::from(other),
        }
    }

    /// Maps a barcode lookup failure; upstream errors report `LOOKUP_ERROR`.
    pub fn from_barcode_lookup(error: CoreError) -> Self {
        match error {
            CoreError::ExternalServiceError(reason) => ApiError::LookupFailed(reason),
            other => ApiError::from(other),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(error.body_text())
        } else {
            ApiError::BadRequest(format!("Failed to read multipart field: {}", error.body_text()))
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(errors.to_string())
    }
}

/// JSON body extractor that also runs `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidateJson(value))
    }
}
