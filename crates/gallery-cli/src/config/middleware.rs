//! Middleware configuration for the HTTP server.
//!
//! All middleware configs are re-exported from `gallery-server` and support
//! both CLI arguments and environment variables.
//!
//! # Example
//!
//! ```bash
//! # Configure CORS origins
//! gallery --allowed-origins "https://example.com"
//! ```

use clap::Args;
use gallery_server::middleware::CorsConfig;
use serde::{Deserialize, Serialize};

use crate::config::TRACING_TARGET_CONFIG;

/// Middleware configuration for the HTTP layer.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS (Cross-Origin Resource Sharing) configuration.
    ///
    /// Controls which origins can access the API and what credentials
    /// are allowed in cross-origin requests.
    #[clap(flatten)]
    pub cors: CorsConfig,
}

impl MiddlewareConfig {
    /// Logs middleware configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            origins = ?self.cors.allowed_origins,
            credentials = self.cors.allow_credentials,
            "CORS configuration"
        );
    }
}
