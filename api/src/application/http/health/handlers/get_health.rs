use axum::extract::State;
use nesventory_gemini_core::domain::health::{HealthCheckService, HealthStatus};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check",
    description = "Liveness probe that also reports whether the Gemini client is configured.",
    responses(
        (status = 200, body = HealthStatus)
    ),
)]
pub async fn get_health(State(state): State<AppState>) -> Response<HealthStatus> {
    Response::OK(state.service.health())
}
