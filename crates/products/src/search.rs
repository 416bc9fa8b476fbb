//! Case-insensitive substring search over the catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::product::Product;

/// Free-text search query.
///
/// Any string is a valid query; the empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// A missing value is the empty query.
    pub fn from_input(text: Option<&str>) -> Self {
        Self(text.unwrap_or_default().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the product's name contains this query, ignoring case.
    pub fn matches(&self, product: &Product) -> bool {
        contains_ignore_case(product.name(), &self.0.to_lowercase())
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SearchQuery {
    fn from(value: String) -> Self {
        Self(value)
    }
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    lowered_needle.is_empty() || haystack.to_lowercase().contains(lowered_needle)
}

/// The ordered subsequence of `catalog` whose names contain `query`.
///
/// Recomputed on every call; results are never cached.
pub fn filter<'a>(catalog: &'a Catalog, query: &SearchQuery) -> Vec<&'a Product> {
    let needle = query.as_str().to_lowercase();
    catalog
        .iter()
        .filter(|product| contains_ignore_case(product.name(), &needle))
        .collect()
}
