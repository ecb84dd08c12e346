//! ArtworkDB client implementation using reqwest.

use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use futures::Stream;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::config::BackendConfig;
use crate::error::{Error, Result};

/// Tracing target for backend client operations.
pub const TRACING_TARGET: &str = "gallery_backend::client";

/// Header carrying the backend API key.
const API_KEY_HEADER: &str = "X-API-Key";

/// Backend path for the full artwork listing.
pub const ARTWORKS_PATH: &str = "/api/artworks";

/// Maximum number of upstream error-body bytes kept for diagnostics.
const ERROR_BODY_LIMIT: usize = 1024;

/// Returns the backend path for a single artwork.
#[must_use]
pub fn artwork_path(artwork_id: &str) -> String {
    format!("{ARTWORKS_PATH}/{artwork_id}")
}

/// Inner client that holds the HTTP client and configuration.
struct BackendClientInner {
    http: Client,
    config: BackendConfig,
}

impl std::fmt::Debug for BackendClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClientInner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// HTTP client for the ArtworkDB backend API.
///
/// Cloning is cheap; all clones share one connection pool. The configured
/// API key is attached to every request as an `X-API-Key` header.
#[derive(Clone, Debug)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

impl BackendClient {
    /// Creates a new backend client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: BackendConfig) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            target: TRACING_TARGET,
            base_url = config.base_url(),
            api_key = config.has_api_key(),
            request_timeout_ms = config.request_timeout().as_millis(),
            "Creating backend client"
        );

        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(BackendConfig::user_agent())
            .build()?;

        let inner = BackendClientInner { http, config };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Creates a new backend client with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(BackendConfig::default())
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &BackendConfig {
        &self.inner.config
    }

    /// Fetches a JSON document from the backend.
    ///
    /// `path` is appended to the configured base URL as-is, so it must
    /// start with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] for non-2xx upstream answers and
    /// [`Error::Reqwest`] for transport failures.
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let started_at = Instant::now();
        let url = format!("{}{path}", self.inner.config.base_url());

        let mut request = self.inner.http.get(&url);
        if let Some(api_key) = self.inner.config.api_key.as_deref().filter(|k| !k.is_empty()) {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(ERROR_BODY_LIMIT)
                .collect();

            tracing::warn!(
                target: TRACING_TARGET,
                path,
                status = status.as_u16(),
                elapsed_ms = started_at.elapsed().as_millis(),
                "Backend request failed"
            );

            return Err(Error::Status { status, body });
        }

        let value = response.json::<Value>().await?;

        tracing::debug!(
            target: TRACING_TARGET,
            path,
            status = status.as_u16(),
            elapsed_ms = started_at.elapsed().as_millis(),
            "Backend request completed"
        );

        Ok(value)
    }

    /// Starts a streamed media download from the backend.
    ///
    /// The media timeout applies to the whole transfer, and the response
    /// body is never buffered here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] for non-2xx upstream answers and
    /// [`Error::Reqwest`] for transport failures.
    pub async fn get_media(&self, path: &str) -> Result<MediaDownload> {
        let url = format!("{}/media/{path}", self.inner.config.base_url());

        tracing::debug!(
            target: TRACING_TARGET,
            path,
            "Starting media download"
        );

        let response = self
            .inner
            .http
            .get(&url)
            .timeout(self.inner.config.media_timeout())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                target: TRACING_TARGET,
                path,
                status = status.as_u16(),
                "Media request failed"
            );

            return Err(Error::Status {
                status,
                body: "media not found".to_string(),
            });
        }

        Ok(MediaDownload { response })
    }
}

/// An in-flight media download.
///
/// Wraps the upstream response so the content type can be inspected before
/// the body is consumed as a byte stream.
#[derive(Debug)]
pub struct MediaDownload {
    response: reqwest::Response,
}

impl MediaDownload {
    /// Returns the upstream content type, defaulting to a binary blob.
    pub fn content_type(&self) -> &str {
        self.response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
    }

    /// Consumes the download and returns the body as a byte stream.
    pub fn bytes_stream(self) -> impl Stream<Item = reqwest::Result<Bytes>> {
        self.response.bytes_stream()
    }
}
