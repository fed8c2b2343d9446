//! Category extraction.

use crate::types::Item;
use std::collections::BTreeSet;

/// Derive the distinct category labels present in `items`.
///
/// The result is sorted by byte order of the label (`String`'s `Ord`),
/// independent of input order. An empty slice yields an empty vector.
pub fn extract_categories(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
