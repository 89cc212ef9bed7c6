pub mod difficulties;
pub mod regions;
pub mod walks;

use axum::{
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::metrics::encode_metrics;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics() -> impl IntoResponse {
    encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: resource routes, health, metrics and API docs.
pub fn build_router(state: ServerState) -> Router {
    let api = Router::new()
        .route("/api/regions", get(regions::list).post(regions::create))
        .route("/api/regions/:id", get(regions::get).put(regions::update).delete(regions::delete))
        .route("/api/walks", get(walks::list).post(walks::create))
        .route("/api/walks/:id", get(walks::get).put(walks::update).delete(walks::delete))
        .route("/api/difficulties", get(difficulties::list))
        .route("/api/difficulties/:id", get(difficulties::get));

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    api.merge(ops)
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
