//! Filter engine for narrowing an item collection by query and category.
//!
//! This crate provides:
//! - Filter trait and the search / category implementations
//! - FilterPipeline for composing filters
//! - FilterEngine holding the query and category selection
//! - FilterSession for hosts that feed user intents
//!
//! ## Architecture
//! Everything is synchronous and pure apart from the engine's own state:
//! 1. The host changes state (`set_query`, `select_category`, `clear_filters`)
//! 2. The host asks for a result over its current collection
//! 3. The pipeline ANDs every filter over the items, keeping input order
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{EngineConfig, FilterEngine};
//!
//! let mut engine = FilterEngine::new(EngineConfig::default());
//! engine.set_query("an");
//! engine.select_category(Some("Fruta"));
//!
//! let result = engine.compute_result(catalog.items());
//! println!("{} visible ({:?})", result.count(), result.summary());
//! ```

pub mod config;
pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod result;
pub mod session;
pub mod state;
pub mod traits;

// Re-export main types
pub use config::{ConfigError, EngineConfig};
pub use engine::{FilterEngine, compute_result};
pub use filter_pipeline::FilterPipeline;
pub use result::{FilterResult, ResultSummary};
pub use session::{FilterSession, UserIntent};
pub use state::{CategoryTarget, FilterState, SelectionPolicy};
pub use traits::Filter;
