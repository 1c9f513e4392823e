//! HTTP API for jotbot
//!
//! A single `POST /analyze` route behind a CORS layer restricted to the
//! configured frontend origins.

mod error;
pub mod handlers;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::{routing::post, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::config::Settings;
use crate::llm::{build_provider, CompletionProvider};

pub use error::ApiError;
pub use handlers::AppState;

/// Build the application router around a completion provider.
pub fn build_router(
    provider: Arc<dyn CompletionProvider>,
    allowed_origins: &[String],
) -> Result<Router> {
    let cors = cors_layer(allowed_origins)?;
    let state = AppState { provider };

    Ok(Router::new()
        .route("/analyze", post(handlers::analyze_transcript))
        .layer(cors)
        .with_state(state))
}

/// CORS for the browser frontend. Credentials rule out `*`, so methods and
/// headers are mirrored from the preflight instead.
fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Run the HTTP server until Ctrl-C or SIGTERM.
pub async fn serve(settings: &Settings) -> Result<()> {
    let provider = build_provider(settings)?;
    info!(
        "Using {} completion provider (model: {})",
        provider.name(),
        provider.model()
    );

    let app = build_router(provider, &settings.server.allowed_origins)?;

    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind jotbot API server to {}", addr))?;

    info!("jotbot API listening on http://{}", listener.local_addr()?);
    info!("CORS origins: {}", settings.server.allowed_origins.join(", "));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("jotbot API server error")?;

    info!("jotbot API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received, draining in-flight requests");
}
