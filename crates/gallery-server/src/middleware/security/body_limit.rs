//! Request body size limiting middleware.

use tower_http::limit::RequestBodyLimitLayer;

/// Default maximum request body size: 1MB.
///
/// The only request body this service accepts is the small JSON payload of
/// the cache-clear endpoint.
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// Creates a request body size limit layer with a custom size.
///
/// # Arguments
///
/// * `max_size` - Maximum allowed request body size in bytes
pub fn create_body_limit_layer(max_size: usize) -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(max_size)
}
