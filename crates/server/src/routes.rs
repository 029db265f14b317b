pub mod companies;
pub mod industries;
pub mod invoices;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Process is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Catch-all for unknown paths and unsupported methods on known paths.
pub async fn not_found() -> ApiError {
    ApiError::route_not_found()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let companies = Router::new()
        .route(
            "/companies",
            get(companies::list).post(companies::create).fallback(not_found),
        )
        .route(
            "/companies/:code",
            get(companies::get)
                .put(companies::update)
                .delete(companies::delete)
                .fallback(not_found),
        );

    let invoices = Router::new()
        .route(
            "/invoices",
            get(invoices::list).post(invoices::create).fallback(not_found),
        )
        .route(
            "/invoices/:id",
            get(invoices::get)
                .put(invoices::update)
                .delete(invoices::delete)
                .fallback(not_found),
        );

    let industries = Router::new()
        .route(
            "/industries",
            get(industries::list).post(industries::create).fallback(not_found),
        )
        .route(
            "/industries/:code/companies",
            post(industries::associate).fallback(not_found),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(companies)
        .merge(invoices)
        .merge(industries)
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
