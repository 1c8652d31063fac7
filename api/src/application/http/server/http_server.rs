use std::{any::Any, sync::Arc};

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use nesventory_gemini_core::{application::create_service, domain::common::NesventoryConfig};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir};
use tracing::{debug, error, info, info_span, warn};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    frontend::{handlers::serve_frontend::serve_frontend, router::meta_routes},
    health::router::health_routes,
    identification::router::identification_routes,
    server::{
        api_entities::api_error::ApiError, app_state::AppState, openapi::build_openapi,
    },
};
use crate::args::Args;

pub const OPENAPI_PATH: &str = "/openapi.json";

pub fn state(args: Arc<Args>) -> AppState {
    let config = NesventoryConfig::from(args.as_ref().clone());
    let service = create_service(config);

    AppState::new(args, service)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let allowed_origins = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "Request handler panicked");

    ApiError::InternalServerError("internal error".to_string()).into_response()
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins);
    let openapi = build_openapi();

    let mut router = Router::new()
        .merge(SwaggerUi::new("/docs").url(OPENAPI_PATH, openapi.clone()))
        .merge(Redoc::with_url("/redoc", openapi))
        .merge(meta_routes())
        .merge(health_routes())
        .merge(identification_routes());

    let dist_path = &state.args.server.dist_path;
    if dist_path.is_dir() {
        info!(path = %dist_path.display(), "Serving frontend bundle");
        router = router.nest_service("/assets", ServeDir::new(dist_path.join("assets")));
    } else {
        info!(path = %dist_path.display(), "Frontend bundle not found, serving API index at /");
    }

    let router = router
        .fallback(serve_frontend)
        .layer(trace_layer)
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state);

    Ok(router)
}
