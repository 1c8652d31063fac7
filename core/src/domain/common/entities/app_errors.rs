use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Gemini AI is not configured")]
    NotConfigured,

    #[error("File type '{0}' is not supported. Only image files are accepted.")]
    InvalidFileType(String),

    #[error("The uploaded file is empty")]
    EmptyFile,

    #[error("Unable to process image: {0}")]
    InvalidImageData(String),

    #[error("Either 'barcode' or 'upc' must be provided")]
    InvalidBarcode,

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}
