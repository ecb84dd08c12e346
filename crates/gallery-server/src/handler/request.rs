//! Request types for the gallery API.

use gallery_core::catalog::{CatalogFilter, PageRequest};
use serde::{Deserialize, Serialize};

/// Query parameters for the gallery listing.
///
/// Every parameter is optional; out-of-range pagination values fall back
/// to the defaults rather than failing the request.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GalleryQuery {
    /// Free-text search query.
    pub q: Option<String>,
    /// Inclusive lower year bound.
    pub year_from: Option<i64>,
    /// Inclusive upper year bound.
    pub year_to: Option<i64>,
    /// Exact medium filter.
    pub medium: Option<String>,
    /// 1-based page number.
    pub page: Option<i64>,
    /// Page size, capped at 100.
    pub per_page: Option<i64>,
}

impl GalleryQuery {
    /// Returns the catalog filter for this query.
    pub fn filter(&self) -> CatalogFilter {
        CatalogFilter {
            query: self.q.clone(),
            year_from: self.year_from,
            year_to: self.year_to,
            medium: self.medium.clone(),
        }
    }

    /// Returns the normalized pagination request.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page, self.per_page)
    }

    /// Returns the filter echo included in listing responses.
    pub fn echo(&self) -> FilterEcho {
        FilterEcho {
            q: self.q.clone().unwrap_or_default(),
            year_from: self.year_from,
            year_to: self.year_to,
            medium: self.medium.clone().unwrap_or_default(),
        }
    }
}

/// The effective filter values, echoed back so the listing UI can
/// repopulate its controls.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterEcho {
    /// Text query, empty when unset.
    pub q: String,
    /// Lower year bound, absent when unset.
    pub year_from: Option<i64>,
    /// Upper year bound, absent when unset.
    pub year_to: Option<i64>,
    /// Medium filter, empty when unset.
    pub medium: String,
}

/// Body of the cache-clear request.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CacheClearRequest {
    /// Must match the configured backend API key.
    pub api_key: String,
}
