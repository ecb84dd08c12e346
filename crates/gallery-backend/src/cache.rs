//! In-memory TTL cache for backend responses.
//!
//! The gallery is read-only and the artwork listing changes rarely, so a
//! small keyed cache in front of the backend removes most upstream calls.
//! Entries are keyed by backend path and expire after a configurable TTL;
//! fetch failures are never cached.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::Result;

/// Tracing target for cache operations.
const TRACING_TARGET: &str = "gallery_backend::cache";

/// Default cache TTL, matching the `CACHE_TTL` configuration default.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// A cached backend response with its storage timestamp.
#[derive(Debug, Clone)]
struct CacheEntry {
    stored_at: Instant,
    value: Arc<Value>,
}

/// Shared cache state: TTL plus the keyed entries.
#[derive(Debug)]
struct ResponseCacheInner {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

/// Keyed TTL cache for backend JSON documents.
///
/// This type is `Clone` and all clones share the same underlying cache
/// through `Arc`. All operations are safe to call concurrently from
/// multiple tasks.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    inner: Arc<ResponseCacheInner>,
}

impl ResponseCache {
    /// Creates a cache with the default TTL of 5 minutes.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_CACHE_TTL)
    }

    /// Creates a cache with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        tracing::info!(
            target: TRACING_TARGET,
            ttl_secs = ttl.as_secs(),
            "response cache initialized"
        );

        Self {
            inner: Arc::new(ResponseCacheInner {
                ttl,
                entries: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Returns the cached document for `path`, fetching a fresh one if the
    /// entry is missing or older than the TTL.
    ///
    /// A failed fetch leaves the cache untouched, so a stale-but-present
    /// entry is replaced only by a successful refresh.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error when no valid cached entry exists.
    pub async fn get_or_fetch<F, Fut>(&self, path: &str, fetch: F) -> Result<Arc<Value>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        if let Some(entry) = self.lookup(path).await {
            tracing::debug!(target: TRACING_TARGET, path, "cache hit");
            return Ok(entry);
        }

        tracing::debug!(target: TRACING_TARGET, path, "cache miss");
        let value = Arc::new(fetch().await?);

        let mut entries = self.inner.entries.write().await;
        entries.insert(
            path.to_string(),
            CacheEntry {
                stored_at: Instant::now(),
                value: Arc::clone(&value),
            },
        );

        Ok(value)
    }

    /// Returns a fresh cached entry, if one exists.
    async fn lookup(&self, path: &str) -> Option<Arc<Value>> {
        let entries = self.inner.entries.read().await;
        let entry = entries.get(path)?;

        if entry.stored_at.elapsed() < self.inner.ttl {
            Some(Arc::clone(&entry.value))
        } else {
            None
        }
    }

    /// Returns the number of cached entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.inner.entries.read().await.len()
    }

    /// Returns whether the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.inner.entries.read().await.is_empty()
    }

    /// Drops a single cached entry.
    pub async fn invalidate(&self, path: &str) {
        self.inner.entries.write().await.remove(path);

        tracing::debug!(target: TRACING_TARGET, path, "cache entry invalidated");
    }

    /// Drops all cached entries.
    pub async fn clear(&self) {
        self.inner.entries.write().await.clear();

        tracing::debug!(target: TRACING_TARGET, "cache cleared");
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn doc(n: i64) -> Value {
        serde_json::json!({ "n": n })
    }

    #[tokio::test]
    async fn fetches_on_miss_and_caches() {
        let cache = ResponseCache::with_ttl(Duration::from_secs(60));

        let first = cache
            .get_or_fetch("/api/artworks", || async { Ok(doc(1)) })
            .await
            .unwrap();
        assert_eq!(*first, doc(1));

        // Second call must come from the cache, not the closure.
        let second = cache
            .get_or_fetch("/api/artworks", || async { Ok(doc(2)) })
            .await
            .unwrap();
        assert_eq!(*second, doc(1));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn expired_entries_are_refetched() {
        let cache = ResponseCache::with_ttl(Duration::from_millis(10));

        cache
            .get_or_fetch("/api/artworks", || async { Ok(doc(1)) })
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(20)).await;

        let refreshed = cache
            .get_or_fetch("/api/artworks", || async { Ok(doc(2)) })
            .await
            .unwrap();
        assert_eq!(*refreshed, doc(2));
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let cache = ResponseCache::with_ttl(Duration::from_secs(60));

        let result = cache
            .get_or_fetch("/api/artworks", || async {
                Err(Error::Config("backend down".to_string()))
            })
            .await;
        assert!(result.is_err());
        assert!(cache.is_empty().await);

        // A later successful fetch populates the entry.
        cache
            .get_or_fetch("/api/artworks", || async { Ok(doc(1)) })
            .await
            .unwrap();
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn entries_are_keyed_by_path() {
        let cache = ResponseCache::with_ttl(Duration::from_secs(60));

        cache
            .get_or_fetch("/api/artworks", || async { Ok(doc(1)) })
            .await
            .unwrap();
        cache
            .get_or_fetch("/api/artworks/AW-1", || async { Ok(doc(2)) })
            .await
            .unwrap();

        assert_eq!(cache.len().await, 2);

        cache.invalidate("/api/artworks").await;
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn clear_drops_everything() {
        let cache = ResponseCache::with_ttl(Duration::from_secs(60));

        cache
            .get_or_fetch("/api/artworks", || async { Ok(doc(1)) })
            .await
            .unwrap();
        cache.clear().await;

        assert!(cache.is_empty().await);
    }
}
