pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, header::InvalidHeaderValue, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::pipeline::handlers;
use crate::ranking::handlers as ranking_handlers;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the document itself.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_document_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/parse",
            post(handlers::handle_parse_resume),
        )
        .route(
            "/api/v1/candidates/rank",
            post(ranking_handlers::handle_rank_candidates),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// CORS for the configured origins. No origins means any origin.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
