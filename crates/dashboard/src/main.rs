//! `OrderFlow` dashboard - JSON API over the order data layer.
//!
//! This binary serves the dashboard API on port 3002 by default.
//!
//! # Data modes
//!
//! Every process starts on the bundled mock orders. `PUT /api/mode` with
//! `{"useRealData": true}` routes subsequent queries to the order webhook
//! configured through `WEBHOOK_BASE_URL`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use orderflow_dashboard::{AppState, DashboardConfig, routes};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = DashboardConfig::from_env().expect("Failed to load configuration");

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "orderflow_dashboard=info,tower_http=debug".into());

    // JSON format when LOG_FORMAT=json for structured log parsing, text otherwise
    let is_json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let state = AppState::from_config(&config).expect("Failed to create application state");
    tracing::info!(
        webhook = %state.service().remote().base_url(),
        mode = %state.mode(),
        "Data service ready"
    );

    let app = routes::app(state);

    let addr = config.socket_addr();
    tracing::info!("dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
