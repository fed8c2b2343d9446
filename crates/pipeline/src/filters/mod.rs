//! Filter implementations for the item pipeline.
//!
//! This module contains the concrete filters that can be composed
//! into a FilterPipeline.

pub mod category;
pub mod search_query;

// Re-export for convenience
pub use category::CategoryFilter;
pub use search_query::SearchQueryFilter;
