//! Service status and backend health handlers.

use axum::Json;
use axum::extract::State;
use axum::routing::get;

use crate::handler::Router;
use crate::handler::response::{HealthResponse, RootResponse};
use crate::service::CatalogService;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "gallery_server::handler::monitors";

/// Application name reported by the root endpoint.
const APP_NAME: &str = "Public Gallery";

async fn root_status() -> Json<RootResponse> {
    Json(RootResponse {
        status: "ok".to_string(),
        app: APP_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Probes backend connectivity through the cached catalog.
///
/// The response is always 200; the body carries the verdict so monitoring
/// can distinguish "frontend down" from "backend down".
#[tracing::instrument(skip_all)]
async fn health_status(State(catalog): State<CatalogService>) -> Json<HealthResponse> {
    let cache_size = catalog.cache_size().await;

    let response = match catalog.artworks().await {
        Ok(_) => HealthResponse::healthy(catalog.cache_size().await),
        Err(err) => {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %err,
                "backend health check failed"
            );
            HealthResponse::unhealthy(cache_size, err.to_string())
        }
    };

    tracing::debug!(
        target: TRACING_TARGET,
        healthy = response.is_healthy(),
        cache_size = response.cache_size,
        "health check completed"
    );

    Json(response)
}

/// Returns a [`Router`] with the status and health routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router {
    Router::new()
        .route("/", get(root_status))
        .route("/health", get(health_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::{
        create_test_server_with_backend, create_test_server_with_router, stub_catalog_backend,
    };

    #[tokio::test]
    async fn root_reports_ok() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/").await;
        response.assert_status_ok();

        let body = response.json::<RootResponse>();
        assert_eq!(body.status, "ok");
        assert_eq!(body.app, APP_NAME);
        assert!(!body.version.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn health_without_backend_is_unhealthy_but_200() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body = response.json::<HealthResponse>();
        assert!(!body.is_healthy());
        assert_eq!(body.backend, "disconnected");
        assert!(body.error.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn health_with_backend_is_healthy() -> anyhow::Result<()> {
        let artworks = serde_json::json!([{ "artwork_id": "AW-1" }]);
        let server =
            create_test_server_with_backend(routes(), stub_catalog_backend(artworks)).await?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body = response.json::<HealthResponse>();
        assert!(body.is_healthy());
        assert_eq!(body.backend, "connected");
        assert_eq!(body.cache_size, 1);
        assert!(body.error.is_none());

        Ok(())
    }
}
