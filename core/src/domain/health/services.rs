use crate::domain::{
    health::{
        entities::{HEALTHY, HealthStatus},
        ports::HealthCheckService,
    },
    identification::services::Service,
};

impl HealthCheckService for Service {
    fn health(&self) -> HealthStatus {
        HealthStatus {
            status: HEALTHY.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            gemini_configured: self.is_configured(),
        }
    }
}
