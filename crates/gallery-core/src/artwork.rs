//! Artwork records as served by the ArtworkDB backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single artwork record.
///
/// The backend schema is open-ended: the fields below are the ones the
/// gallery searches and filters on, and everything else is carried through
/// the flattened `extra` map so detail pages lose nothing.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    /// Stable identifier assigned by the backend.
    #[serde(default)]
    pub artwork_id: String,

    /// Display title.
    #[serde(default)]
    pub title: String,

    /// Free-form search keywords.
    #[serde(default)]
    pub keywords: String,

    /// Medium, e.g. "oil" or "watercolor".
    #[serde(default)]
    pub medium: String,

    /// Surface, e.g. "canvas" or "paper".
    #[serde(default)]
    pub surface: String,

    /// Year of creation. The backend is inconsistent here: some records
    /// carry a number, others a string, others nothing at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Year>,

    /// All remaining backend fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Artwork {
    /// Returns the lowercase text this artwork is matched against for
    /// free-text search: id, title, keywords, medium, and surface.
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.artwork_id, self.title, self.keywords, self.medium, self.surface
        )
        .to_lowercase()
    }

    /// Returns the year as a number, if present and parseable.
    pub fn year_number(&self) -> Option<i64> {
        self.year.as_ref().and_then(Year::as_number)
    }
}

/// A year value that may arrive as a JSON number or a numeric string.
///
/// The raw representation is preserved so records round-trip unchanged;
/// [`Year::as_number`] is the lenient view the filters and stats use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    /// A numeric year, e.g. `1994`.
    Number(f64),
    /// A textual year, e.g. `"1994"` or `"c. 1994"`.
    Text(String),
}

impl Year {
    /// Returns the year as an integer, truncating fractional numbers.
    ///
    /// Textual years must parse as a plain integer; anything else
    /// (e.g. `"c. 1994"`) is treated as unknown.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n as i64),
            Self::Number(_) => None,
            Self::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}
