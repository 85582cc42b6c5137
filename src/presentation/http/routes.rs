//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/persons", person_routes())
        .nest("/countries", country_routes())
}

/// Person routes
fn person_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::persons::list_persons).post(handlers::persons::create_person),
        )
        .route("/export/csv", get(handlers::persons::export_csv))
        .route("/export/excel", get(handlers::persons::export_excel))
        .route(
            "/{person_id}",
            get(handlers::persons::get_person)
                .put(handlers::persons::update_person)
                .delete(handlers::persons::delete_person),
        )
}

/// Country routes
fn country_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::countries::list_countries).post(handlers::countries::create_country),
        )
        .route("/upload", post(handlers::countries::upload_countries))
        .route("/{country_id}", get(handlers::countries::get_country))
}
