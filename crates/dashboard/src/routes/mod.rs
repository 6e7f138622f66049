//! HTTP route handlers for the dashboard API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Data mode
//! GET  /api/mode               - Current mode
//! PUT  /api/mode               - Switch between mock and real data
//!
//! # Orders
//! POST /api/orders             - Filtered order listing with category totals
//! GET  /api/orders/{id}        - Single order
//!
//! # Analytics
//! POST /api/analytics          - Aggregate figures
//!
//! # Printing
//! POST /api/print-orders       - Orders eligible for printing
//! POST /api/print-documents    - Render a document for selected orders
//! ```
//!
//! Every data handler reads the mode once when the request arrives.

mod analytics;
mod mode;
mod orders;
mod print;

use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// API routes without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/mode", get(mode::show).put(mode::update))
        .route("/api/orders", post(orders::list))
        .route("/api/orders/{id}", get(orders::show))
        .route("/api/analytics", post(analytics::summary))
        .route("/api/print-orders", post(print::list))
        .route("/api/print-documents", post(print::document))
}

/// Complete application: health check, API routes, tracing and CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not touch the webhook.
async fn health() -> &'static str {
    "ok"
}
