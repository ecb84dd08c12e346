//! HTTP server startup with lifecycle management.
//!
//! This module provides a clean API for starting the HTTP server with
//! graceful shutdown and descriptive error handling.

mod error;
mod http_server;
mod shutdown;

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "gallery_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "gallery_cli::server::shutdown";

use axum::Router;
pub use error::{Result, ServerError};
use http_server::serve_http;

use crate::config::ServerConfig;

/// Starts the HTTP server with graceful shutdown.
///
/// # Arguments
///
/// * `app` - The Axum router to serve
/// * `config` - Server configuration that determines binding and timeouts
///
/// # Errors
///
/// Returns an error if:
/// - Server configuration is invalid
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: Router, config: ServerConfig) -> Result<()> {
    serve_http(app, config).await.inspect_err(|err| {
        if let Some(suggestion) = err.suggestion() {
            tracing::warn!(
                target: TRACING_TARGET_SHUTDOWN,
                recoverable = err.is_recoverable(),
                suggestion,
                "server failed to run"
            );
        }
    })
}
