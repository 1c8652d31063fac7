use std::sync::Arc;

use crate::{
    domain::{
        common::NesventoryConfig,
        identification::{ports::LLMClient, services::Service},
    },
    infrastructure::llm::GeminiLLMClient,
};

/// Builds the process-wide service. Never fails: without a usable Gemini
/// client the service starts in degraded mode.
pub fn create_service(config: NesventoryConfig) -> Service {
    let llm_client = GeminiLLMClient::configure(&config.llm)
        .map(|client| Arc::new(client) as Arc<dyn LLMClient>);

    Service::new(llm_client)
}
