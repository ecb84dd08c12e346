//! Gallery listing and artwork detail handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use gallery_core::catalog::{collect_mediums, paginate};

use crate::handler::request::GalleryQuery;
use crate::handler::response::GalleryListResponse;
use crate::handler::{ErrorKind, Result, Router};
use crate::service::CatalogService;

/// Tracing target for gallery operations.
const TRACING_TARGET: &str = "gallery_server::handler::gallery";

/// Longest accepted artwork id, as a basic input sanity check.
const MAX_ARTWORK_ID_LEN: usize = 50;

#[tracing::instrument(skip_all, fields(q = query.q.as_deref()))]
async fn gallery_index(
    State(catalog): State<CatalogService>,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<GalleryListResponse>> {
    let artworks = catalog.artworks().await?;

    // Dropdown mediums come from the unfiltered collection.
    let mediums = collect_mediums(&artworks);

    let filtered = query.filter().apply(artworks);
    let (page_items, pagination) = paginate(filtered, query.page_request());

    tracing::debug!(
        target: TRACING_TARGET,
        page = pagination.page,
        total_items = pagination.total_items,
        "gallery listing served"
    );

    Ok(Json(GalleryListResponse {
        artworks: page_items,
        mediums,
        pagination,
        filters: query.echo(),
    }))
}

#[tracing::instrument(skip_all, fields(artwork_id = %artwork_id))]
async fn gallery_show(
    State(catalog): State<CatalogService>,
    Path(artwork_id): Path<String>,
) -> Result<Json<gallery_core::Artwork>> {
    if artwork_id.is_empty() || artwork_id.len() > MAX_ARTWORK_ID_LEN {
        return Err(ErrorKind::BadRequest
            .with_message("Invalid artwork ID")
            .with_resource("artwork"));
    }

    let artwork = catalog.artwork(&artwork_id).await.map_err(|err| {
        if err.is_not_found() {
            ErrorKind::NotFound
                .with_message("Artwork not found")
                .with_resource("artwork")
        } else {
            err.into()
        }
    })?;

    Ok(Json(artwork))
}

/// Returns a [`Router`] with the gallery routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router {
    Router::new()
        .route("/gallery", get(gallery_index))
        .route("/gallery/{artwork_id}", get(gallery_show))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::{
        create_test_server_with_backend, create_test_server_with_router, stub_catalog_backend,
    };

    fn stub_artworks() -> serde_json::Value {
        serde_json::json!([
            {
                "artwork_id": "AW-1",
                "title": "Harbor at Dusk",
                "keywords": "harbor, boats",
                "medium": "oil",
                "surface": "canvas",
                "year": 1994
            },
            {
                "artwork_id": "AW-2",
                "title": "Morning Mist",
                "keywords": "fog",
                "medium": "watercolor",
                "surface": "paper",
                "year": 2001
            },
            {
                "artwork_id": "AW-3",
                "title": "Harbor Lights",
                "keywords": "night",
                "medium": "oil",
                "surface": "canvas",
                "year": 2010
            }
        ])
    }

    #[tokio::test]
    async fn oversized_artwork_id_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server_with_router(routes()).await?;

        let long_id = "x".repeat(MAX_ARTWORK_ID_LEN + 1);
        let response = server.get(&format!("/gallery/{long_id}")).await;
        response.assert_status_bad_request();

        Ok(())
    }

    #[tokio::test]
    async fn listing_without_backend_reports_unavailable() -> anyhow::Result<()> {
        // Default test config points at a closed local port, so the
        // handler surfaces the backend as unavailable.
        let server = create_test_server_with_router(routes()).await?;

        let response = server.get("/gallery").await;
        response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

        Ok(())
    }

    #[tokio::test]
    async fn listing_keeps_mediums_unfiltered() -> anyhow::Result<()> {
        let server =
            create_test_server_with_backend(routes(), stub_catalog_backend(stub_artworks()))
                .await?;

        let response = server
            .get("/gallery")
            .add_query_param("medium", "watercolor")
            .await;
        response.assert_status_ok();

        let body = response.json::<GalleryListResponse>();
        assert_eq!(body.artworks.len(), 1);
        assert_eq!(body.artworks[0].artwork_id, "AW-2");
        // The dropdown still lists every medium in the collection.
        assert_eq!(body.mediums, ["oil", "watercolor"]);
        assert_eq!(body.pagination.total_items, 1);
        assert_eq!(body.filters.medium, "watercolor");

        Ok(())
    }

    #[tokio::test]
    async fn listing_searches_then_paginates() -> anyhow::Result<()> {
        let server =
            create_test_server_with_backend(routes(), stub_catalog_backend(stub_artworks()))
                .await?;

        let response = server
            .get("/gallery")
            .add_query_param("q", "harbor")
            .add_query_param("per_page", "1")
            .add_query_param("page", "2")
            .await;
        response.assert_status_ok();

        let body = response.json::<GalleryListResponse>();
        assert_eq!(body.artworks.len(), 1);
        assert_eq!(body.artworks[0].artwork_id, "AW-3");
        assert_eq!(body.pagination.total_items, 2);
        assert_eq!(body.pagination.total_pages, 2);
        assert!(body.pagination.has_prev);
        assert!(!body.pagination.has_next);

        Ok(())
    }

    #[tokio::test]
    async fn artwork_detail_is_served_from_backend() -> anyhow::Result<()> {
        let server =
            create_test_server_with_backend(routes(), stub_catalog_backend(stub_artworks()))
                .await?;

        let response = server.get("/gallery/AW-2").await;
        response.assert_status_ok();

        let artwork = response.json::<gallery_core::Artwork>();
        assert_eq!(artwork.artwork_id, "AW-2");
        assert_eq!(artwork.title, "Morning Mist");

        let missing = server.get("/gallery/AW-404").await;
        missing.assert_status_not_found();

        Ok(())
    }

    #[tokio::test]
    async fn upstream_error_status_is_forwarded() -> anyhow::Result<()> {
        let backend = axum::Router::new().route(
            "/api/artworks",
            get(|| async { (axum::http::StatusCode::FORBIDDEN, "denied") }),
        );
        let server = create_test_server_with_backend(routes(), backend).await?;

        let response = server.get("/gallery").await;
        response.assert_status(axum::http::StatusCode::FORBIDDEN);

        Ok(())
    }
}
