use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const HEALTHY: &str = "healthy";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    pub gemini_configured: bool,
}
