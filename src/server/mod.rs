pub mod error;
pub mod handlers;

pub use error::{ApiError, ApiResult};

use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::Request;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::store::ReceiptStore;

/// Shared state handed to every request handler
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        Self { store }
    }
}

/// Build the receipt API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Peer address, present only when served with connect info
fn remote_addr<B>(request: &Request<B>) -> Option<SocketAddr> {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr)
}

fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
        remote = ?remote_addr(request),
    )
}

/// Bind `host:port` and serve until Ctrl-C or SIGTERM.
pub async fn run(
    host: &str,
    port: u16,
    request_timeout: Option<Duration>,
    state: AppState,
) -> Result<()> {
    let mut router = create_router(state);
    if let Some(timeout) = request_timeout {
        router = router.layer(TimeoutLayer::new(timeout));
    }

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    let local_addr = listener
        .local_addr()
        .context("Failed to read bound address")?;
    tracing::info!(addr = %local_addr, "Server listening");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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
    tracing::info!("Shutdown signal received");
}
