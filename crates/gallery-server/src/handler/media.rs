//! Streamed media proxy.
//!
//! Media objects are served from the backend through this service so the
//! browser never talks to ArtworkDB directly. Bodies are streamed through
//! without buffering.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::Response;
use axum::routing::get;
use gallery_backend::BackendClient;

use crate::handler::{ErrorKind, Result, Router};

/// Tracing target for media proxy operations.
const TRACING_TARGET: &str = "gallery_server::handler::media";

/// Cache-Control header for proxied media: cacheable for a day.
const MEDIA_CACHE_CONTROL: &str = "public, max-age=86400";

#[tracing::instrument(skip_all, fields(path = %path))]
async fn media_proxy(
    State(backend): State<BackendClient>,
    Path(path): Path<String>,
) -> Result<Response> {
    // Path traversal guard, mirrored on the backend side as well.
    if path.contains("..") || path.starts_with('/') {
        tracing::warn!(target: TRACING_TARGET, path, "rejected media path");
        return Err(ErrorKind::BadRequest
            .with_message("Invalid media path")
            .with_resource("media"));
    }

    let download = backend.get_media(&path).await.map_err(|err| {
        if err.is_not_found() {
            ErrorKind::NotFound
                .with_message("Media not found")
                .with_resource("media")
        } else {
            err.into()
        }
    })?;

    let content_type = download.content_type().to_string();

    let response = Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, MEDIA_CACHE_CONTROL)
        .body(Body::from_stream(download.bytes_stream()))
        .map_err(|err| {
            ErrorKind::InternalServerError.with_context(format!("response build failed: {err}"))
        })?;

    Ok(response)
}

/// Returns a [`Router`] with the media proxy route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router {
    Router::new().route("/media/{*path}", get(media_proxy))
}
