//! HTTP server
//!
//! Serves the market data endpoint plus a liveness probe.

mod error;
mod routes;

pub use error::{ApiError, UNAVAILABLE_MESSAGE};
pub use routes::INFLATION_PATH;

use crate::market::MarketDataAdapter;
use axum::http::Request;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Shared application state, passed to handlers via `axum::extract::State`
pub struct AppState {
    pub adapter: MarketDataAdapter,
}

impl AppState {
    pub fn new(adapter: MarketDataAdapter) -> Arc<Self> {
        Arc::new(Self { adapter })
    }
}

/// Assemble the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(INFLATION_PATH, get(routes::get_inflation))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            tracing::info_span!(
                "request",
                request_id = %Uuid::new_v4(),
                method = %request.method(),
                path = %request.uri().path(),
            )
        }))
        .with_state(state)
}

/// Serve the router on an already-bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("cpi-feed listening on http://{addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, gracefully stopping");
}
