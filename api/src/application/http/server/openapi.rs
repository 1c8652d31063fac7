use utoipa::OpenApi;

use crate::application::http::{
    frontend::router::MetaApiDoc, health::router::HealthApiDoc,
    identification::router::IdentificationApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NesVentory Gemini Plugin",
        description = "Google Gemini AI-powered plugin for Department 56 collectibles identification"
    ),
    tags(
        (name = "identification", description = "Gemini-backed item, data tag and barcode lookups"),
        (name = "health", description = "Liveness"),
        (name = "meta", description = "API index and frontend entry point")
    )
)]
pub struct ApiDoc;

pub fn build_openapi() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    openapi.merge(MetaApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi.merge(IdentificationApiDoc::openapi());
    openapi
}
