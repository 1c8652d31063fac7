use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::domain::common::entities::app_errors::CoreError;

/// A file received from a multipart upload, before any validation.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Image bytes whose header decoded successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedImage {
    pub data: Vec<u8>,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl ValidatedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }
}

impl UploadedFile {
    /// Checks the declared content type, then emptiness, then that the bytes
    /// carry a readable image header. The order matters: a non-image upload is
    /// rejected before its body is inspected.
    pub fn into_image(self) -> Result<ValidatedImage, CoreError> {
        let content_type = self.content_type.unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(CoreError::InvalidFileType(content_type));
        }

        if self.data.is_empty() {
            return Err(CoreError::EmptyFile);
        }

        let reader = ImageReader::new(Cursor::new(self.data.as_slice()))
            .with_guessed_format()
            .map_err(|e| CoreError::InvalidImageData(e.to_string()))?;

        let format = reader
            .format()
            .ok_or_else(|| CoreError::InvalidImageData("unrecognized image format".to_string()))?;

        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| CoreError::InvalidImageData(e.to_string()))?;

        Ok(ValidatedImage {
            data: self.data,
            format,
            width,
            height,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeQuery {
    pub barcode: String,
    pub upc: Option<String>,
}

impl BarcodeQuery {
    /// The code to look up: `barcode` unless blank, then `upc`.
    pub fn code(&self) -> Result<&str, CoreError> {
        [Some(self.barcode.as_str()), self.upc.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|code| !code.is_empty())
            .ok_or(CoreError::InvalidBarcode)
    }
}
