use axum::{
    extract::State,
    response::{IntoResponse, Response as AxumResponse},
};

use super::{api_index::ApiIndex, read_index};
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    summary = "Root",
    description = "Serves the frontend when it has been built, otherwise the JSON API index.",
    responses(
        (status = 200, description = "Frontend HTML, or the API index when no frontend is built", body = ApiIndex)
    ),
)]
pub async fn root(State(state): State<AppState>) -> Result<AxumResponse, ApiError> {
    match read_index(&state.args.server.dist_path).await? {
        Some(html) => Ok(html.into_response()),
        None => Ok(Response::OK(ApiIndex::current()).into_response()),
    }
}
