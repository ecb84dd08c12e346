//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig         # Host, port, timeouts, shutdown
//! ├── middleware: MiddlewareConfig # CORS
//! └── backend: BackendConfig       # ArtworkDB base URL, API key, cache TTL
//! ```
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! # Configure backend and server
//! gallery --backend-base "http://localhost:9000" --port 9900
//!
//! # Or via environment variables
//! BACKEND_BASE="http://localhost:9000" PORT=9900 gallery
//! ```

mod middleware;
mod server;

use std::process;

use anyhow::Context;
use clap::Parser;
use gallery_backend::BackendConfig;
pub use middleware::MiddlewareConfig;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;

/// Tracing target for configuration events.
pub const TRACING_TARGET_CONFIG: &str = "gallery_cli::config";

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "gallery_cli::server::startup";

/// Complete CLI configuration.
///
/// Combines all configuration groups for the gallery frontend:
/// - [`ServerConfig`]: Network binding and lifecycle
/// - [`MiddlewareConfig`]: HTTP middleware (CORS)
/// - [`BackendConfig`]: ArtworkDB connection and response caching
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "gallery")]
#[command(about = "Read-only gallery frontend for ArtworkDB")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration (CORS).
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// ArtworkDB backend configuration.
    #[clap(flatten)]
    pub backend: BackendConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses
    /// CLI arguments.
    ///
    /// This is the preferred way to initialize the CLI configuration as it
    /// ensures .env files are loaded before clap parses arguments, allowing
    /// environment variables from .env to be used as defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is
    /// enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.backend
            .validate()
            .context("invalid backend configuration")?;
        Ok(())
    }

    /// Logs configuration at startup (no sensitive information).
    pub fn log(&self) {
        Self::log_build_info();
        self.server.log();
        self.middleware.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            backend_base = %self.backend.base_url(),
            api_key_configured = self.backend.has_api_key(),
            request_timeout_secs = self.backend.request_timeout_secs,
            media_timeout_secs = self.backend.media_timeout_secs,
            cache_ttl_secs = self.backend.cache_ttl_secs,
            "Backend configuration"
        );
    }

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            "Build information"
        );
    }
}
