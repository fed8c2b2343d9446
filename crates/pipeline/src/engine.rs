//! The filter engine: state transitions plus result computation.
//!
//! `FilterEngine` owns a `FilterState` and changes it only through
//! `set_query`, `select_category`/`select_target` and `clear_filters`.
//! Results are never cached; `compute_result` runs the pipeline over
//! whatever collection the caller passes in.

use crate::config::EngineConfig;
use crate::filter_pipeline::FilterPipeline;
use crate::result::FilterResult;
use crate::state::{CategoryTarget, FilterState};
use catalog::{Item, extract_categories};

/// Visible subset of `items` under `state`, using the standard pipeline.
pub fn compute_result<'a>(items: &'a [Item], state: &FilterState) -> FilterResult<'a> {
    FilterResult::new(FilterPipeline::standard().apply(items, state))
}

pub struct FilterEngine {
    state: FilterState,
    config: EngineConfig,
    pipeline: FilterPipeline,
}

impl FilterEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            state: FilterState::default(),
            config,
            pipeline: FilterPipeline::standard(),
        }
    }

    /// Replace the standard search + category pipeline.
    pub fn with_pipeline(mut self, pipeline: FilterPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Store the query verbatim.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.query = text.into();
        tracing::debug!("Query set to {:?}", self.state.query);
    }

    /// `None` is the "all" target.
    pub fn select_category(&mut self, category: Option<&str>) {
        self.select_target(CategoryTarget::from(category));
    }

    /// Apply a category click according to the configured selection policy.
    ///
    /// Categories absent from the current collection are accepted.
    pub fn select_target(&mut self, target: CategoryTarget) {
        let current = self.state.selected_category.as_deref();
        self.state.selected_category = self.config.selection_policy.resolve(current, target);
        tracing::debug!(
            "Category selection is now {:?}",
            self.state.selected_category
        );
    }

    /// Reset query and category in one step.
    pub fn clear_filters(&mut self) {
        self.state = FilterState::default();
        tracing::debug!("Filters cleared");
    }

    pub fn compute_result<'a>(&self, items: &'a [Item]) -> FilterResult<'a> {
        FilterResult::new(self.pipeline.apply(items, &self.state))
    }

    /// Sorted distinct categories of `items`
    pub fn categories(&self, items: &[Item]) -> Vec<String> {
        extract_categories(items)
    }

    pub fn is_clear_visible(&self) -> bool {
        self.state.has_active_filters()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
