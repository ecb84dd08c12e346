//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust
//! use gallery_backend::BackendConfig;
//! use gallery_server::handler::routes;
//! use gallery_server::service::ServiceState;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = BackendConfig::default();
//! let state = ServiceState::from_config(config)?;
//! let router = routes(state);
//! # Ok(())
//! # }
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod cache;
mod error;
mod gallery;
mod media;
mod monitors;
mod request;
mod response;
mod stats;

use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
pub use crate::handler::request::{CacheClearRequest, FilterEcho, GalleryQuery};
pub use crate::handler::response::{
    CacheClearResponse, GalleryListResponse, HealthResponse, RootResponse,
};
use crate::service::ServiceState;

/// State-carrying router used by the per-module `routes()` builders.
pub(crate) type Router = axum::Router<ServiceState>;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an `axum::`[`Router`] with all routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes(state: ServiceState) -> axum::Router {
    Router::new()
        .merge(monitors::routes())
        .merge(gallery::routes())
        .merge(media::routes())
        .merge(stats::routes())
        .merge(cache::routes())
        .fallback(handler)
        .with_state(state)
}

#[cfg(test)]
pub mod test {
    use axum::Json;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum_test::TestServer;
    use gallery_backend::BackendConfig;

    use crate::handler::Router;
    use crate::service::ServiceState;

    /// Backend configuration pointing at a port nothing listens on, so
    /// backend calls fail fast with a connection error.
    fn unreachable_backend_config() -> BackendConfig {
        BackendConfig {
            backend_base: "http://127.0.0.1:59991".to_string(),
            request_timeout_secs: 1,
            media_timeout_secs: 1,
            ..Default::default()
        }
    }

    /// Returns a new [`TestServer`] with the given router.
    pub async fn create_test_server_with_router(router: Router) -> anyhow::Result<TestServer> {
        let config = unreachable_backend_config();
        create_test_server_with_config(router, config).await
    }

    /// Returns a new [`TestServer`] with the given router and an API key.
    pub async fn create_test_server_with_key(
        router: Router,
        api_key: &str,
    ) -> anyhow::Result<TestServer> {
        let config = BackendConfig {
            api_key: Some(api_key.to_string()),
            ..unreachable_backend_config()
        };
        create_test_server_with_config(router, config).await
    }

    /// Returns a new [`TestServer`] with the given router and configuration.
    pub async fn create_test_server_with_config(
        router: Router,
        config: BackendConfig,
    ) -> anyhow::Result<TestServer> {
        let state = ServiceState::from_config(config)?;
        let app = router.with_state(state);
        let server = TestServer::new(app)?;
        Ok(server)
    }

    /// Serves the given router on an ephemeral port and returns its base URL.
    pub async fn spawn_stub_backend(router: axum::Router) -> anyhow::Result<String> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(format!("http://{addr}"))
    }

    /// Returns a new [`TestServer`] whose backend calls hit the given stub.
    pub async fn create_test_server_with_backend(
        router: Router,
        backend: axum::Router,
    ) -> anyhow::Result<TestServer> {
        let config = BackendConfig {
            backend_base: spawn_stub_backend(backend).await?,
            ..unreachable_backend_config()
        };
        create_test_server_with_config(router, config).await
    }

    /// Stub backend serving a fixed artwork listing plus per-id lookups.
    pub fn stub_catalog_backend(artworks: serde_json::Value) -> axum::Router {
        let listing = artworks.clone();
        axum::Router::new()
            .route("/api/artworks", get(move || async move { Json(listing) }))
            .route(
                "/api/artworks/{artwork_id}",
                get(move |Path(artwork_id): Path<String>| async move {
                    let found = artworks.as_array().and_then(|items| {
                        items
                            .iter()
                            .find(|item| item["artwork_id"] == artwork_id.as_str())
                            .cloned()
                    });
                    match found {
                        Some(artwork) => Json(artwork).into_response(),
                        None => (StatusCode::NOT_FOUND, "not found").into_response(),
                    }
                }),
            )
    }

    /// Returns a new [`TestServer`] with the default router.
    pub async fn create_test_server() -> anyhow::Result<TestServer> {
        let config = unreachable_backend_config();
        let state = ServiceState::from_config(config)?;
        let server = TestServer::new(crate::handler::routes(state))?;
        Ok(server)
    }

    #[tokio::test]
    async fn handlers() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        assert!(server.is_running());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_returns_json_404() -> anyhow::Result<()> {
        let server = create_test_server().await?;

        let response = server.get("/no/such/route").await;
        response.assert_status_not_found();

        Ok(())
    }
}
