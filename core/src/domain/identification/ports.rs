use std::future::Future;

use async_trait::async_trait;

use crate::domain::{
    common::entities::app_errors::CoreError,
    identification::{
        entities::{BarcodeResult, DataTagResult, IdentificationResult},
        value_objects::{BarcodeQuery, UploadedFile},
    },
};

/// Generative model able to answer a prompt with JSON text.
///
/// Held as a trait object so the service can run with the Gemini adapter, a
/// test stub, or no client at all.
#[async_trait]
pub trait LLMClient: Send + Sync {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> Result<String, CoreError>;

    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError>;
}

pub trait IdentificationService: Send + Sync {
    fn identify_items(
        &self,
        upload: UploadedFile,
    ) -> impl Future<Output = Result<IdentificationResult, CoreError>> + Send;

    fn parse_data_tag(
        &self,
        upload: UploadedFile,
    ) -> impl Future<Output = Result<DataTagResult, CoreError>> + Send;

    fn lookup_barcode(
        &self,
        query: BarcodeQuery,
    ) -> impl Future<Output = Result<BarcodeResult, CoreError>> + Send;
}
