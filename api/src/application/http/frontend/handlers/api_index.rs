use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

pub const API_MESSAGE: &str = "NesVentory Gemini Plugin API";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiIndex {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ApiIndex {
    pub fn current() -> Self {
        let endpoints = [
            ("health", "/health"),
            ("identify_image", "/nesventory/identify/image"),
            ("parse_data_tag", "/parse-data-tag"),
            ("lookup_barcode", "/lookup-barcode"),
        ]
        .into_iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect();

        Self {
            message: API_MESSAGE.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api",
    tag = "meta",
    summary = "API index",
    description = "Lists the available endpoints. Always JSON, even when the frontend is built.",
    responses(
        (status = 200, body = ApiIndex)
    ),
)]
pub async fn api_index() -> Response<ApiIndex> {
    Response::OK(ApiIndex::current())
}
