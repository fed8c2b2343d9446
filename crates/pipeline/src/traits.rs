//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to an item collection.

use crate::state::FilterState;
use catalog::Item;

/// Core trait for filtering items.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared between hosts
/// - Filters are pure predicates over one item and the current state;
///   the pipeline owns iteration so every filter sees items in order
/// - Filtering never fails: every (item, state) pair has an answer
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `item` stays visible under `state`.
    fn keep(&self, item: &Item, state: &FilterState) -> bool;
}
