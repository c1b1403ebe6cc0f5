use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod extractors;
mod middleware;
mod state;

use config::Config;
use state::AppState;

fn wants_help() -> bool {
    std::env::args().any(|a| a == "--help" || a == "-h")
}

fn print_help() {
    eprintln!(
        r#"securelayer-server - SecureLayer contact and certificate service

USAGE:
    cargo run -p securelayer-server [OPTIONS]

OPTIONS:
    -h, --help           Print this help

ENVIRONMENT VARIABLES:
    BIND_ADDRESS                  Listen address (default: 127.0.0.1:5000)
    DATABASE_PATH                 RocksDB path (default: ./data/securelayer.db)
    STATIC_DIR                    Directory served as the static site (default: none)
    CORS_ALLOWED_ORIGINS          Comma-separated origins (default: any origin)
    EXPOSE_ERROR_DETAILS          Return storage error text to clients (default: false)
    RUST_LOG                      Log level (default: securelayer_server=debug)

EXAMPLES:
    # Serve the site from ./public with verbose errors
    STATIC_DIR=./public EXPOSE_ERROR_DETAILS=true cargo run -p securelayer-server
"#
    );
}

/// Build CORS layer with configured allowed origins
fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    use axum::http::header::CONTENT_TYPE;

    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    for origin in allowed_origins {
        if let Ok(header_value) = origin.parse::<HeaderValue>() {
            cors = cors.allow_origin(header_value);
        } else {
            tracing::warn!("Invalid CORS origin: {}", origin);
        }
    }

    cors
}

#[tokio::main]
async fn main() -> Result<()> {
    if wants_help() {
        print_help();
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "securelayer_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let bind_address = config.bind_address;
    tracing::info!("Starting securelayer server on {}", bind_address);
    if config.expose_error_details {
        tracing::warn!("EXPOSE_ERROR_DETAILS is on; storage errors are sent to clients");
    }

    let state = Arc::new(AppState::new(config)?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        // Health checks
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Contact intake
        .route("/submit", post(api::contacts::submit_contact))
        // Certificate registry
        .route(
            "/verify-certificate",
            post(api::certificates::verify_certificate),
        )
        .route(
            "/admin/add-certificate",
            post(api::certificates::add_certificate),
        );

    if let Some(static_dir) = &state.config.static_dir {
        if static_dir.is_dir() {
            tracing::info!("Serving static assets from {:?}", static_dir);
            let index = static_dir.join("index.html");
            router = router.fallback_service(
                ServeDir::new(static_dir)
                    .append_index_html_on_directories(true)
                    .not_found_service(ServeFile::new(index)),
            );
        } else {
            tracing::warn!("Static assets directory {:?} does not exist", static_dir);
        }
    }

    // Order matters: last added = first executed
    router
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(build_cors_layer(&state.config.cors_allowed_origins))
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Graceful shutdown initiated");
}
