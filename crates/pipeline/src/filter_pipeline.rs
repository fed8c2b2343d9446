//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{CategoryFilter, SearchQueryFilter};
use crate::state::FilterState;
use crate::traits::Filter;
use catalog::Item;

/// Chains multiple filters together into a processing pipeline.
///
/// Filters are ANDed: an item is visible only if every filter keeps it.
/// Items come out in the order they went in.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchQueryFilter)
///     .add_filter(CategoryFilter);
///
/// let visible = pipeline.apply(&items, &state);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Search query first, then category restriction.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(SearchQueryFilter)
            .add_filter(CategoryFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the items.
    ///
    /// ## Algorithm
    /// 1. Start with every item, borrowed, in input order
    /// 2. For each filter in order, retain the items it keeps
    ///    and log input/output counts
    /// 3. Return what survives
    pub fn apply<'a>(&self, items: &'a [Item], state: &FilterState) -> Vec<&'a Item> {
        let mut current: Vec<&'a Item> = items.iter().collect();
        for filter in &self.filters {
            let input_count = current.len();
            current.retain(|item| filter.keep(item, state));
            tracing::debug!(
                "Filter applied: {} (input count: {}, output count: {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
