//! Filter to keep only items whose name contains the query text.

use crate::state::FilterState;
use crate::traits::Filter;
use catalog::Item;

/// Case-insensitive substring match of the query against `Item::name`.
///
/// ## Algorithm
/// Both sides are lowercased with Unicode case mapping (`str::to_lowercase`),
/// then compared with `str::contains`. An empty query matches every item.
/// No trimming, tokenizing, or Unicode normalization is applied, so a
/// precomposed "ç" does not match a decomposed "c\u{327}".
pub struct SearchQueryFilter;

impl SearchQueryFilter {
    /// Match `name` against `query` with the rule above
    pub fn matches(name: &str, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        name.to_lowercase().contains(&query.to_lowercase())
    }
}

impl Filter for SearchQueryFilter {
    fn name(&self) -> &str {
        "SearchQueryFilter"
    }

    fn keep(&self, item: &Item, state: &FilterState) -> bool {
        Self::matches(&item.name, &state.query)
    }
}
