//! Search, filtering, pagination, and statistics over artwork sets.
//!
//! The gallery is read-only and the backend serves the full artwork list in
//! one response, so all catalog operations are in-memory transforms over
//! `Vec<Artwork>`. Everything here is pure and synchronous; the caching and
//! fetching live in `gallery-backend`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::artwork::{Artwork, Year};

/// Default page size for gallery listings.
pub const DEFAULT_PER_PAGE: u32 = 24;

/// Maximum accepted page size; larger requests fall back to the default.
pub const MAX_PER_PAGE: u32 = 100;

/// Bucket label for records with a missing or unusable medium/year.
const UNKNOWN_BUCKET: &str = "Unknown";

/// Filter criteria for a gallery listing.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Free-text query, matched case-insensitively against id, title,
    /// keywords, medium, and surface.
    pub query: Option<String>,
    /// Inclusive lower bound on the artwork year.
    pub year_from: Option<i64>,
    /// Inclusive upper bound on the artwork year.
    pub year_to: Option<i64>,
    /// Exact medium match, case-insensitive.
    pub medium: Option<String>,
}

impl CatalogFilter {
    /// Applies this filter to an artwork list.
    ///
    /// Year bounds exclude artworks whose year is missing or not numeric.
    /// Blank queries (empty after trimming) are ignored.
    pub fn apply(&self, mut items: Vec<Artwork>) -> Vec<Artwork> {
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            let needle = query.trim().to_lowercase();
            if !needle.is_empty() {
                items.retain(|a| a.search_haystack().contains(&needle));
            }
        }

        if let Some(year_from) = self.year_from {
            items.retain(|a| matched_year(a).is_some_and(|y| y >= year_from));
        }

        if let Some(year_to) = self.year_to {
            items.retain(|a| matched_year(a).is_some_and(|y| y <= year_to));
        }

        if let Some(medium) = self.medium.as_deref().filter(|m| !m.is_empty()) {
            let needle = medium.trim().to_lowercase();
            items.retain(|a| a.medium.to_lowercase() == needle);
        }

        items
    }
}

/// Returns the year used for range filtering and stats bucketing.
///
/// A year of 0 or an empty string counts as missing, matching how the
/// backend populates blank fields.
fn matched_year(artwork: &Artwork) -> Option<i64> {
    let year = artwork.year.as_ref()?;
    let present = match year {
        Year::Number(n) => *n != 0.0,
        Year::Text(s) => !s.is_empty(),
    };
    if !present {
        return None;
    }
    year.as_number()
}

/// A normalized pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Number of items per page, within `1..=MAX_PER_PAGE`.
    pub per_page: u32,
}

impl PageRequest {
    /// Builds a request from raw client input.
    ///
    /// Pages below 1 coerce to 1; page sizes outside `1..=MAX_PER_PAGE`
    /// coerce to [`DEFAULT_PER_PAGE`].
    pub fn from_raw(page: Option<i64>, per_page: Option<i64>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let per_page = match per_page.unwrap_or(i64::from(DEFAULT_PER_PAGE)) {
            n if (1..=i64::from(MAX_PER_PAGE)).contains(&n) => n as u32,
            _ => DEFAULT_PER_PAGE,
        };

        Self {
            page: u32::try_from(page).unwrap_or(u32::MAX),
            per_page,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Pagination metadata for a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Effective 1-based page number, clamped to the last page.
    pub page: u32,
    /// Effective page size.
    pub per_page: u32,
    /// Number of items after filtering.
    pub total_items: u64,
    /// Number of pages, at least 1 even for an empty result.
    pub total_pages: u32,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

/// Slices a filtered artwork list into the requested page.
///
/// The page number is clamped into the valid range for the list, so a
/// request far past the end returns the last page rather than an empty one.
pub fn paginate(items: Vec<Artwork>, request: PageRequest) -> (Vec<Artwork>, Pagination) {
    let total_items = items.len() as u64;
    let per_page = u64::from(request.per_page);
    let total_pages = (total_items.div_ceil(per_page)).max(1) as u32;

    let page = if total_items > 0 {
        request.page.clamp(1, total_pages)
    } else {
        1
    };

    let start = (u64::from(page) - 1) * per_page;
    let page_items = items
        .into_iter()
        .skip(start as usize)
        .take(per_page as usize)
        .collect();

    let pagination = Pagination {
        page,
        per_page: request.per_page,
        total_items,
        total_pages,
        has_prev: page > 1,
        has_next: page < total_pages,
    };

    (page_items, pagination)
}

/// Collects the distinct, non-blank medium values from an artwork set,
/// trimmed and sorted. Used to populate the medium filter dropdown.
pub fn collect_mediums(items: &[Artwork]) -> Vec<String> {
    let mediums: std::collections::BTreeSet<String> = items
        .iter()
        .map(|a| a.medium.trim())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect();

    mediums.into_iter().collect()
}

/// Artwork distribution statistics.
///
/// The maps are `serde_json::Map` (insertion-ordered) so the serialized
/// output keeps the documented ordering: `by_medium` ascending by medium,
/// `by_year` descending by year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Total number of artwork records.
    pub total_artworks: u64,
    /// Count of artworks per medium, "Unknown" for blank mediums.
    pub by_medium: serde_json::Map<String, Value>,
    /// Count of artworks per year, "Unknown" for missing or non-numeric years.
    pub by_year: serde_json::Map<String, Value>,
}

/// Computes distribution statistics over the full artwork set.
pub fn compute_stats(items: &[Artwork]) -> Stats {
    let mut mediums: BTreeMap<String, u64> = BTreeMap::new();
    let mut years: BTreeMap<String, u64> = BTreeMap::new();

    for item in items {
        let medium = if item.medium.is_empty() {
            UNKNOWN_BUCKET.to_string()
        } else {
            item.medium.trim().to_string()
        };
        *mediums.entry(medium).or_default() += 1;

        let year = match matched_year(item) {
            Some(year) => year.to_string(),
            None => UNKNOWN_BUCKET.to_string(),
        };
        *years.entry(year).or_default() += 1;
    }

    let by_medium = mediums
        .into_iter()
        .map(|(k, v)| (k, Value::from(v)))
        .collect();
    let by_year = years
        .into_iter()
        .rev()
        .map(|(k, v)| (k, Value::from(v)))
        .collect();

    Stats {
        total_artworks: items.len() as u64,
        by_medium,
        by_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: &str, title: &str, medium: &str, year: Option<Year>) -> Artwork {
        Artwork {
            artwork_id: id.to_string(),
            title: title.to_string(),
            medium: medium.to_string(),
            year,
            ..Default::default()
        }
    }

    fn sample_set() -> Vec<Artwork> {
        vec![
            artwork("AW-1", "Harbor at Dusk", "oil", Some(Year::Number(1994.0))),
            artwork("AW-2", "Morning Mist", "watercolor", Some(Year::Text("2001".to_string()))),
            artwork("AW-3", "Harbor Lights", "Oil", Some(Year::Number(2010.0))),
            artwork("AW-4", "Untitled", "", None),
        ]
    }

    #[test]
    fn text_search_is_case_insensitive() {
        let filter = CatalogFilter {
            query: Some("HARBOR".to_string()),
            ..Default::default()
        };

        let matched = filter.apply(sample_set());
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|a| a.title.contains("Harbor")));
    }

    #[test]
    fn blank_query_matches_everything() {
        let filter = CatalogFilter {
            query: Some("   ".to_string()),
            ..Default::default()
        };

        assert_eq!(filter.apply(sample_set()).len(), 4);
    }

    #[test]
    fn year_bounds_exclude_missing_years() {
        let filter = CatalogFilter {
            year_from: Some(2000),
            ..Default::default()
        };

        let matched = filter.apply(sample_set());
        let ids: Vec<&str> = matched.iter().map(|a| a.artwork_id.as_str()).collect();
        assert_eq!(ids, ["AW-2", "AW-3"]);
    }

    #[test]
    fn year_range_is_inclusive() {
        let filter = CatalogFilter {
            year_from: Some(1994),
            year_to: Some(2001),
            ..Default::default()
        };

        let matched = filter.apply(sample_set());
        let ids: Vec<&str> = matched.iter().map(|a| a.artwork_id.as_str()).collect();
        assert_eq!(ids, ["AW-1", "AW-2"]);
    }

    #[test]
    fn zero_year_counts_as_missing() {
        let items = vec![artwork("AW-0", "Zero", "oil", Some(Year::Number(0.0)))];
        let filter = CatalogFilter {
            year_from: Some(-5000),
            ..Default::default()
        };

        assert!(filter.apply(items).is_empty());
    }

    #[test]
    fn medium_filter_is_case_insensitive_exact() {
        let filter = CatalogFilter {
            medium: Some("OIL".to_string()),
            ..Default::default()
        };

        let matched = filter.apply(sample_set());
        let ids: Vec<&str> = matched.iter().map(|a| a.artwork_id.as_str()).collect();
        assert_eq!(ids, ["AW-1", "AW-3"]);
    }

    #[test]
    fn page_request_normalizes_raw_input() {
        let request = PageRequest::from_raw(Some(-3), Some(500));
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, DEFAULT_PER_PAGE);

        let request = PageRequest::from_raw(None, Some(0));
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, DEFAULT_PER_PAGE);

        let request = PageRequest::from_raw(Some(3), Some(50));
        assert_eq!(request.page, 3);
        assert_eq!(request.per_page, 50);
    }

    #[test]
    fn paginate_slices_and_reports_bounds() {
        let items: Vec<Artwork> = (0..10)
            .map(|i| artwork(&format!("AW-{i}"), "t", "oil", None))
            .collect();

        let (page_items, pagination) =
            paginate(items, PageRequest { page: 2, per_page: 4 });

        assert_eq!(page_items.len(), 4);
        assert_eq!(page_items[0].artwork_id, "AW-4");
        assert_eq!(pagination.total_items, 10);
        assert_eq!(pagination.total_pages, 3);
        assert!(pagination.has_prev);
        assert!(pagination.has_next);
    }

    #[test]
    fn paginate_clamps_page_past_the_end() {
        let items: Vec<Artwork> = (0..5)
            .map(|i| artwork(&format!("AW-{i}"), "t", "oil", None))
            .collect();

        let (page_items, pagination) =
            paginate(items, PageRequest { page: 99, per_page: 2 });

        assert_eq!(pagination.page, 3);
        assert_eq!(page_items.len(), 1);
        assert!(pagination.has_prev);
        assert!(!pagination.has_next);
    }

    #[test]
    fn paginate_empty_set_reports_one_page() {
        let (page_items, pagination) = paginate(Vec::new(), PageRequest::default());

        assert!(page_items.is_empty());
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.total_pages, 1);
        assert!(!pagination.has_prev);
        assert!(!pagination.has_next);
    }

    #[test]
    fn collect_mediums_deduplicates_and_sorts() {
        let items = vec![
            artwork("1", "a", " oil ", None),
            artwork("2", "b", "watercolor", None),
            artwork("3", "c", "oil", None),
            artwork("4", "d", "  ", None),
        ];

        assert_eq!(collect_mediums(&items), ["oil", "watercolor"]);
    }

    #[test]
    fn stats_buckets_by_medium_and_year() {
        let stats = compute_stats(&sample_set());

        assert_eq!(stats.total_artworks, 4);
        assert_eq!(stats.by_medium.get("oil"), Some(&Value::from(1)));
        assert_eq!(stats.by_medium.get("Oil"), Some(&Value::from(1)));
        assert_eq!(stats.by_medium.get("Unknown"), Some(&Value::from(1)));
        assert_eq!(stats.by_year.get("1994"), Some(&Value::from(1)));
        assert_eq!(stats.by_year.get("Unknown"), Some(&Value::from(1)));
    }

    #[test]
    fn stats_year_keys_are_descending() {
        let stats = compute_stats(&sample_set());
        let keys: Vec<&String> = stats.by_year.keys().collect();
        assert_eq!(keys, ["Unknown", "2010", "2001", "1994"]);
    }
}
