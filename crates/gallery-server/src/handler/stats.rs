//! Artwork distribution statistics handler.

use axum::Json;
use axum::extract::State;
use axum::routing::get;
use gallery_core::catalog::{Stats, compute_stats};

use crate::handler::{Result, Router};
use crate::service::CatalogService;

#[tracing::instrument(skip_all)]
async fn artwork_stats(State(catalog): State<CatalogService>) -> Result<Json<Stats>> {
    let artworks = catalog.artworks().await?;
    Ok(Json(compute_stats(&artworks)))
}

/// Returns a [`Router`] with the stats route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router {
    Router::new().route("/api/stats", get(artwork_stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::{
        create_test_server_with_backend, create_test_server_with_router, stub_catalog_backend,
    };

    #[tokio::test]
    async fn stats_without_backend_reports_unavailable() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/api/stats").await;
        response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

        Ok(())
    }

    #[tokio::test]
    async fn stats_are_computed_from_backend_listing() -> anyhow::Result<()> {
        let artworks = serde_json::json!([
            { "artwork_id": "AW-1", "medium": "oil", "year": 1994 },
            { "artwork_id": "AW-2", "medium": "oil", "year": 2001 },
            { "artwork_id": "AW-3", "medium": "", "year": 0 }
        ]);
        let server =
            create_test_server_with_backend(routes(), stub_catalog_backend(artworks)).await?;

        let response = server.get("/api/stats").await;
        response.assert_status_ok();

        let stats = response.json::<Stats>();
        assert_eq!(stats.total_artworks, 3);
        assert_eq!(stats.by_medium.get("oil"), Some(&serde_json::json!(2)));
        assert_eq!(stats.by_medium.get("Unknown"), Some(&serde_json::json!(1)));

        // Years descend, with the unknown bucket first.
        let years: Vec<&str> = stats.by_year.keys().map(String::as_str).collect();
        assert_eq!(years, ["Unknown", "2001", "1994"]);

        Ok(())
    }
}
