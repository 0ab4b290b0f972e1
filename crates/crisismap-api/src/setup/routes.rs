//! Route configuration and setup

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use crisismap_core::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::state::AppState;

// Headroom above the image cap for the text fields and multipart framing.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Setup all application routes.
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let body_limit = config.max_file_size_bytes + MULTIPART_OVERHEAD_BYTES;

    let router = Router::new()
        .route("/", get(handlers::health_check))
        .route(
            "/api/reports",
            post(handlers::submit_report).get(handlers::list_reports),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(map_response(collapse_body_limit_rejection))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(router)
}

/// Body-limit rejections are produced by the limit layers before any handler
/// runs. Fold them into the same generic server error as every other failure
/// so the response contract stays uniform.
async fn collapse_body_limit_rejection(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!("Request body exceeded the configured limit");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: "Server error".to_string(),
            }),
        )
            .into_response();
    }
    response
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();

        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
