//! Cached catalog facade over the backend client.
//!
//! Handlers never talk to the backend directly: this service routes every
//! artwork read through the TTL cache, and decodes the cached JSON into
//! domain types at the edge.

use gallery_backend::{ARTWORKS_PATH, BackendClient, ResponseCache, Result, artwork_path};
use gallery_core::Artwork;

/// Tracing target for catalog operations.
const TRACING_TARGET: &str = "gallery_server::service::catalog";

/// Read access to the artwork catalog with response caching.
///
/// Cloning is cheap; clones share the backend client and the cache.
#[derive(Clone, Debug)]
pub struct CatalogService {
    backend: BackendClient,
    cache: ResponseCache,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(backend: BackendClient, cache: ResponseCache) -> Self {
        Self { backend, cache }
    }

    /// Returns the full artwork list, from cache when fresh.
    ///
    /// # Errors
    ///
    /// Propagates backend and decoding failures.
    pub async fn artworks(&self) -> Result<Vec<Artwork>> {
        let document = self
            .cache
            .get_or_fetch(ARTWORKS_PATH, || self.backend.get_json(ARTWORKS_PATH))
            .await?;

        let artworks: Vec<Artwork> = serde_json::from_value((*document).clone())?;

        tracing::debug!(
            target: TRACING_TARGET,
            count = artworks.len(),
            "artwork listing loaded"
        );

        Ok(artworks)
    }

    /// Returns a single artwork by id, from cache when fresh.
    ///
    /// # Errors
    ///
    /// Propagates backend failures; an upstream 404 surfaces as
    /// [`gallery_backend::Error::Status`].
    pub async fn artwork(&self, artwork_id: &str) -> Result<Artwork> {
        let path = artwork_path(artwork_id);
        let document = self
            .cache
            .get_or_fetch(&path, || self.backend.get_json(&path))
            .await?;

        Ok(serde_json::from_value((*document).clone())?)
    }

    /// Returns the configured API key, if any.
    ///
    /// Used by the cache-clear endpoint to authorize requests.
    pub fn api_key(&self) -> Option<&str> {
        self.backend
            .config()
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
    }

    /// Returns the number of cached backend responses.
    pub async fn cache_size(&self) -> usize {
        self.cache.len().await
    }

    /// Drops all cached backend responses.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;

        tracing::info!(target: TRACING_TARGET, "catalog cache cleared");
    }
}
