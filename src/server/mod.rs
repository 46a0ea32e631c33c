//! HTTP front end.
//!
//! One process hosts one `Deployment`. Every deployment serves its form pages from a
//! static directory and evaluates submitted forms on POST, answering with JSON.
//! Unknown paths fall back to the index page.

mod assets;
mod error;
pub mod form;
mod handlers;

pub use error::{ApiError, ServerError};
pub use form::FormFields;

use crate::config::{Deployment, ServerConfig};
use crate::reliability::IndicatorTable;
use axum::Router;
use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{any, get, post};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Immutable state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub static_root: Arc<PathBuf>,
    pub indicators: Arc<IndicatorTable>,
}

impl AppState {
    pub fn new(static_root: impl Into<PathBuf>, indicators: IndicatorTable) -> Self {
        Self {
            static_root: Arc::new(static_root.into()),
            indicators: Arc::new(indicators),
        }
    }
}

/// Builds the router for `deployment`.
pub fn router(deployment: Deployment, state: AppState, max_body_bytes: usize) -> Router {
    let routes = match deployment {
        Deployment::Fuel => Router::new()
            .route("/calc1", any(assets::calc1))
            .route("/calc2", any(assets::calc2))
            .route(
                "/evaluate1",
                post(handlers::coal_composition).fallback(handlers::redirect_home),
            )
            .route(
                "/evaluate2",
                post(handlers::fuel_oil).fallback(handlers::redirect_home),
            ),
        Deployment::Imbalance => Router::new().route(
            "/evaluate",
            post(handlers::electricity_imbalance).fallback(handlers::redirect_home),
        ),
        Deployment::Reliability => Router::new()
            .route("/calc1", any(assets::calc1))
            .route("/calc2", any(assets::calc2))
            .route(
                "/evaluate1",
                post(handlers::circuit_reliability).fallback(handlers::redirect_home),
            )
            .route(
                "/evaluate2",
                post(handlers::outage_losses).fallback(handlers::redirect_home),
            ),
    };

    routes
        .route("/", any(assets::index))
        .route("/static/*path", get(assets::static_asset))
        .fallback(assets::index)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "request"
    );
    response
}

/// Runs the server described by `config` until interrupted.
///
/// # Errors
///
/// Returns `ServerError::Setup` if the indicator table cannot be loaded,
/// `ServerError::Bind` if the address is unavailable, and `ServerError::Serve`
/// if the accept loop fails.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let indicators = config.load_indicators()?;
    let static_root = config.static_root();
    if !static_root.is_dir() {
        warn!(
            static_root = %static_root.display(),
            "static directory not found; pages will answer 404"
        );
    }

    let app = router(
        config.deployment,
        AppState::new(static_root.clone(), indicators),
        config.max_body_bytes,
    );

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local = listener.local_addr().unwrap_or(addr);

    info!(
        deployment = %config.deployment,
        static_root = %static_root.display(),
        "Server running on http://{local}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
