//! Filter to keep only items in the selected category.

use crate::state::FilterState;
use crate::traits::Filter;
use catalog::Item;

/// Exact, case-sensitive category restriction.
///
/// With no selection every item passes. A selection that no item carries
/// is accepted and simply matches nothing.
pub struct CategoryFilter;

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn keep(&self, item: &Item, state: &FilterState) -> bool {
        match &state.selected_category {
            Some(selected) => item.category == *selected,
            None => true,
        }
    }
}
