use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    identification::{
        decoder::{Decoded, decode_barcode, decode_data_tag, decode_identification},
        entities::{BarcodeResult, DataTagResult, IdentificationResult},
        ports::{IdentificationService, LLMClient},
        prompts::{barcode_lookup_prompt, data_tag_prompt, identification_prompt},
        value_objects::{BarcodeQuery, UploadedFile},
    },
};

/// Request-independent state shared by every handler. The client is set once
/// at startup and only read afterwards; `None` means degraded mode.
#[derive(Clone)]
pub struct Service {
    llm_client: Option<Arc<dyn LLMClient>>,
}

impl Service {
    pub fn new(llm_client: Option<Arc<dyn LLMClient>>) -> Self {
        Self { llm_client }
    }

    pub fn is_configured(&self) -> bool {
        self.llm_client.is_some()
    }

    fn llm_client(&self) -> Result<&dyn LLMClient, CoreError> {
        self.llm_client.as_deref().ok_or(CoreError::NotConfigured)
    }
}

fn log_degraded<T>(pipeline: &str, decoded: &Decoded<T>, raw: &str) {
    if let Some(reason) = decoded.error() {
        error!(pipeline, reason, "Failed to parse Gemini response as JSON");
        error!(pipeline, response_text = raw, "Unparsed Gemini response");
    }
}

impl IdentificationService for Service {
    async fn identify_items(&self, upload: UploadedFile) -> Result<IdentificationResult, CoreError> {
        let llm_client = self.llm_client()?;
        let image = upload.into_image()?;

        info!(
            format = image.mime_type(),
            width = image.width,
            height = image.height,
            "Identifying items in image"
        );

        let mime_type = image.mime_type().to_string();
        let raw = llm_client
            .generate_with_image(identification_prompt().to_string(), image.data, mime_type)
            .await?;

        let decoded = decode_identification(&raw);
        log_degraded("identify_image", &decoded, &raw);

        let result = decoded.into_value();
        info!(items = result.items.len(), "Image identification complete");
        Ok(result)
    }

    async fn parse_data_tag(&self, upload: UploadedFile) -> Result<DataTagResult, CoreError> {
        let llm_client = self.llm_client()?;
        let image = upload.into_image()?;

        let mime_type = image.mime_type().to_string();
        let raw = llm_client
            .generate_with_image(data_tag_prompt().to_string(), image.data, mime_type)
            .await?;

        let decoded = decode_data_tag(&raw);
        log_degraded("parse_data_tag", &decoded, &raw);

        Ok(decoded.into_value())
    }

    async fn lookup_barcode(&self, query: BarcodeQuery) -> Result<BarcodeResult, CoreError> {
        let llm_client = self.llm_client()?;
        let code = query.code()?;

        info!(code, "Looking up barcode");

        let raw = llm_client
            .generate_with_text(barcode_lookup_prompt(code))
            .await?;

        let decoded = decode_barcode(&raw);
        log_degraded("lookup_barcode", &decoded, &raw);

        Ok(decoded.into_value())
    }
}
