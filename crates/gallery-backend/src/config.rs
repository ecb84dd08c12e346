//! Backend connection configuration.

use std::time::Duration;

use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Default ArtworkDB base URL for local development.
pub const DEFAULT_BACKEND_BASE: &str = "http://localhost:9000";

/// Default timeout for backend API requests.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Default timeout for streamed media requests.
pub const DEFAULT_MEDIA_TIMEOUT_SECS: u64 = 30;

/// Default artwork cache TTL.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// ArtworkDB backend configuration.
///
/// All options can be set via CLI arguments or environment variables:
/// - `BACKEND_BASE` - Backend base URL (default: <http://localhost:9000>)
/// - `API_KEY` - API key sent as the `X-API-Key` header
/// - `BACKEND_REQUEST_TIMEOUT` - API request timeout in seconds
/// - `BACKEND_MEDIA_TIMEOUT` - Media request timeout in seconds
/// - `CACHE_TTL` - Artwork cache TTL in seconds
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct BackendConfig {
    /// Base URL of the ArtworkDB backend API.
    ///
    /// A trailing slash is stripped before request URLs are built.
    #[arg(long, env = "BACKEND_BASE", default_value = DEFAULT_BACKEND_BASE)]
    pub backend_base: String,

    /// API key sent to the backend as the `X-API-Key` header.
    ///
    /// When unset, backend requests carry no key and the cache-clear
    /// endpoint is disabled.
    #[arg(long, env = "API_KEY")]
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Timeout in seconds for backend API requests.
    #[arg(long, env = "BACKEND_REQUEST_TIMEOUT", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// Timeout in seconds for streamed media requests.
    ///
    /// Media downloads are larger than API responses, so this is allowed
    /// to be longer than the API timeout.
    #[arg(long, env = "BACKEND_MEDIA_TIMEOUT", default_value_t = DEFAULT_MEDIA_TIMEOUT_SECS)]
    pub media_timeout_secs: u64,

    /// How long cached backend responses stay valid, in seconds.
    #[arg(long, env = "CACHE_TTL", default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_ttl_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend_base: DEFAULT_BACKEND_BASE.to_string(),
            api_key: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            media_timeout_secs: DEFAULT_MEDIA_TIMEOUT_SECS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl BackendConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or a timeout is
    /// outside the 1-300 second range.
    pub fn validate(&self) -> Result<()> {
        if let Err(err) = Url::parse(&self.backend_base) {
            return Err(Error::Config(format!(
                "invalid backend base URL {:?}: {err}",
                self.backend_base
            )));
        }

        for (name, secs) in [
            ("request", self.request_timeout_secs),
            ("media", self.media_timeout_secs),
        ] {
            if secs == 0 || secs > 300 {
                return Err(Error::Config(format!(
                    "{name} timeout of {secs} seconds is invalid, must be between 1 and 300"
                )));
            }
        }

        Ok(())
    }

    /// Returns the base URL with any trailing slashes stripped.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.backend_base.trim_end_matches('/')
    }

    /// Returns whether an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Returns the API request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the media request timeout as a [`Duration`].
    #[must_use]
    pub const fn media_timeout(&self) -> Duration {
        Duration::from_secs(self.media_timeout_secs)
    }

    /// Returns the cache TTL as a [`Duration`].
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Returns the User-Agent string sent to the backend.
    #[must_use]
    pub fn user_agent() -> String {
        format!("gallery/{}", env!("CARGO_PKG_VERSION"))
    }
}
