//! Response bodies for the gallery API.

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gallery_core::Artwork;
use gallery_core::catalog::Pagination;
use serde::{Deserialize, Serialize};

use crate::handler::request::FilterEcho;

/// HTTP error response representation with security-conscious design.
///
/// Contains everything needed to serialize an error response: the error
/// name, a client-safe message, optional resource and debugging context,
/// and the HTTP status code.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse<'a> {
    /// The error name/type identifier
    pub name: Cow<'a, str>,
    /// User-friendly error message safe for client display
    pub message: Cow<'a, str>,
    /// The resource that the error relates to (optional, set by handler)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Cow<'a, str>>,
    /// Internal context for debugging (optional, not exposed to client)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Cow<'a, str>>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "The request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    // 5xx Server Errors
    pub const BAD_GATEWAY: Self = Self::new(
        "bad_gateway",
        "The backend returned an unexpected response",
        StatusCode::BAD_GATEWAY,
    );
    pub const FORBIDDEN: Self = Self::new(
        "forbidden",
        "You don't have permission to access this resource",
        StatusCode::FORBIDDEN,
    );
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const NOT_FOUND: Self = Self::new(
        "not_found",
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );
    pub const SERVICE_UNAVAILABLE: Self = Self::new(
        "service_unavailable",
        "The backend service is currently unavailable",
        StatusCode::SERVICE_UNAVAILABLE,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(name: &'a str, message: &'a str, status: StatusCode) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
            resource: None,
            context: None,
            status,
        }
    }

    /// Creates a new error response with custom resource.
    /// If a resource already exists, it merges them with a separator.
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        let new_resource = resource.into();
        self.resource = Some(match self.resource {
            Some(existing) => Cow::Owned(format!("{existing}/{new_resource}")),
            None => new_resource,
        });
        self
    }

    /// Creates a new error response with custom message.
    /// Appends the new message to the existing message.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        let new_message = message.into();
        self.message = Cow::Owned(format!("{}. {}", self.message, new_message));
        self
    }

    /// Attaches context to the error response.
    /// If context already exists, it merges them with a separator.
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        let new_context = context.into();
        self.context = Some(match self.context {
            Some(existing) => Cow::Owned(format!("{existing}; {new_context}")),
            None => new_context,
        });
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Root status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    /// Always `"ok"` when the service is running.
    pub status: String,
    /// Application name.
    pub app: String,
    /// Crate version.
    pub version: String,
}

/// Gallery listing response: one page of artworks plus the data the
/// listing UI needs to render filter controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryListResponse {
    /// The requested page of the filtered artwork list.
    pub artworks: Vec<Artwork>,
    /// Distinct mediums across the whole (unfiltered) collection.
    pub mediums: Vec<String>,
    /// Pagination metadata for the filtered list.
    pub pagination: Pagination,
    /// Echo of the effective filter values.
    pub filters: FilterEcho,
}

/// Health probe response.
///
/// The status code is always 200; the body carries the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"healthy"` or `"unhealthy"`.
    pub status: String,
    /// `"connected"` or `"disconnected"`.
    pub backend: String,
    /// Number of cached backend responses.
    pub cache_size: usize,
    /// Probe timestamp.
    pub timestamp: jiff::Timestamp,
    /// Backend error message, present only when unhealthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    /// Builds a healthy response.
    pub fn healthy(cache_size: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            backend: "connected".to_string(),
            cache_size,
            timestamp: jiff::Timestamp::now(),
            error: None,
        }
    }

    /// Builds an unhealthy response carrying the backend error.
    pub fn unhealthy(cache_size: usize, error: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            backend: "disconnected".to_string(),
            cache_size,
            timestamp: jiff::Timestamp::now(),
            error: Some(error.into()),
        }
    }

    /// Returns whether this response reports a healthy backend.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Cache administration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheClearResponse {
    /// Always `"success"`.
    pub status: String,
    /// Human-readable confirmation.
    pub message: String,
    /// When the cache was cleared.
    pub timestamp: jiff::Timestamp,
}

impl CacheClearResponse {
    /// Builds the standard success response.
    pub fn cleared() -> Self {
        Self {
            status: "success".to_string(),
            message: "Cache cleared".to_string(),
            timestamp: jiff::Timestamp::now(),
        }
    }
}
