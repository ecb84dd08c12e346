//! Cache administration handler.

use axum::Json;
use axum::extract::State;
use axum::routing::post;

use crate::handler::request::CacheClearRequest;
use crate::handler::response::CacheClearResponse;
use crate::handler::{ErrorKind, Result, Router};
use crate::service::CatalogService;

/// Tracing target for cache administration.
const TRACING_TARGET: &str = "gallery_server::handler::cache";

/// Drops the backend response cache.
///
/// Requires the backend API key; a server configured without a key keeps
/// this endpoint disabled rather than open.
#[tracing::instrument(skip_all)]
async fn clear_cache(
    State(catalog): State<CatalogService>,
    Json(request): Json<CacheClearRequest>,
) -> Result<Json<CacheClearResponse>> {
    let authorized = catalog
        .api_key()
        .is_some_and(|expected| expected == request.api_key);

    if !authorized {
        tracing::warn!(target: TRACING_TARGET, "cache clear rejected");
        return Err(ErrorKind::Forbidden.into_error());
    }

    catalog.clear_cache().await;

    Ok(Json(CacheClearResponse::cleared()))
}

/// Returns a [`Router`] with the cache administration route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router {
    Router::new().route("/api/cache/clear", post(clear_cache))
}
