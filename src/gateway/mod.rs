//! HTTP gateway (Axum) in front of the [`Orchestrator`](crate::orchestrator::Orchestrator).
//!
//! Used by the `triage` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::analyze_handler;
pub use payload::{AnalyzeRequest, HealthResponse, IndexResponse};
pub use state::HandlerState;

use crate::cache::{TRIAGE_STATUS_HEADER, TRIAGE_STATUS_HEALTHY};

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tracing::instrument]
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

#[tracing::instrument(skip(state))]
pub async fn health_handler(State(state): State<HandlerState>) -> Response {
    let orchestrator = &state.orchestrator;
    let shutting_down = orchestrator.is_shut_down();

    let cache_stats = orchestrator.cache_stats();
    let body = HealthResponse {
        status: if shutting_down { "shutting_down" } else { TRIAGE_STATUS_HEALTHY },
        knowledge_entries: orchestrator.knowledge_entries(),
        semantic_mode: orchestrator.semantic_mode().as_str(),
        generator: orchestrator.generator_name().to_string(),
        cache_enabled: orchestrator.cache_enabled(),
        cache_entries: orchestrator.cache_len(),
        cache_hit_rate: cache_stats.hit_rate(),
        cache_stats,
    };
    let status_code = if shutting_down {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        TRIAGE_STATUS_HEADER,
        HeaderValue::from_static(body.status),
    );

    (status_code, headers, Json(body)).into_response()
}
