//! Host-facing session: an item collection plus an engine, driven by
//! discrete user intents.

use crate::config::EngineConfig;
use crate::engine::FilterEngine;
use crate::result::FilterResult;
use crate::state::{CategoryTarget, FilterState};
use catalog::{Catalog, Item};
use serde::{Deserialize, Serialize};

/// A user event delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserIntent {
    QueryChanged(String),
    CategoryClicked(CategoryTarget),
    ClearClicked,
}

/// Owns the current item collection and the filter engine.
///
/// The collection is replaced wholesale with `set_items`. Categories and
/// results are recomputed from it on every call, so a replacement is
/// visible immediately; a selection the new collection lacks yields zero
/// matches until it is cleared.
pub struct FilterSession {
    items: Vec<Item>,
    engine: FilterEngine,
}

impl FilterSession {
    pub fn new(items: Vec<Item>, config: EngineConfig) -> Self {
        Self {
            items,
            engine: FilterEngine::new(config),
        }
    }

    pub fn from_catalog(catalog: Catalog, config: EngineConfig) -> Self {
        Self::new(catalog.into_items(), config)
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        tracing::debug!("Item collection replaced ({} items)", items.len());
        self.items = items;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Apply one intent. Events are processed in the order delivered.
    pub fn apply(&mut self, intent: UserIntent) {
        match intent {
            UserIntent::QueryChanged(text) => self.engine.set_query(text),
            UserIntent::CategoryClicked(target) => self.engine.select_target(target),
            UserIntent::ClearClicked => self.engine.clear_filters(),
        }
    }

    pub fn categories(&self) -> Vec<String> {
        self.engine.categories(&self.items)
    }

    pub fn result(&self) -> FilterResult<'_> {
        self.engine.compute_result(&self.items)
    }

    pub fn is_clear_visible(&self) -> bool {
        self.engine.is_clear_visible()
    }

    pub fn state(&self) -> &FilterState {
        self.engine.state()
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    /// Pick an item from the visible list.
    ///
    /// Returns `None` if no visible item has this id, including items
    /// that exist but are currently filtered out.
    pub fn select_item(&self, id: &str) -> Option<&Item> {
        let item = self.result().get(id);
        if let Some(item) = item {
            tracing::info!("Selected item {} ({})", item.id, item.name);
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ResultSummary;

    fn session() -> FilterSession {
        FilterSession::from_catalog(Catalog::sample(), EngineConfig::default())
    }

    #[test]
    fn test_intents_drive_state() {
        let mut session = session();
        session.apply(UserIntent::QueryChanged("a".to_string()));
        assert!(session.is_clear_visible());

        session.apply(UserIntent::CategoryClicked(CategoryTarget::Named(
            "Carne".to_string(),
        )));
        assert_eq!(session.result().ids(), vec!["7", "8"]);

        session.apply(UserIntent::ClearClicked);
        assert_eq!(session.state(), &FilterState::default());
        assert_eq!(session.result().count(), 8);
    }

    #[test]
    fn test_categories_follow_item_replacement() {
        let mut session = session();
        assert_eq!(session.categories(), vec!["Carne", "Fruta", "Vegetal"]);

        session.set_items(vec![Item::new("9", "Queijo", "Laticínio")]);
        assert_eq!(session.categories(), vec!["Laticínio"]);
    }

    #[test]
    fn test_stale_selection_after_replacement() {
        let mut session = session();
        session.apply(UserIntent::CategoryClicked(CategoryTarget::Named(
            "Fruta".to_string(),
        )));
        session.set_items(vec![Item::new("9", "Queijo", "Laticínio")]);

        assert_eq!(session.result().summary(), ResultSummary::NoResults);
        assert_eq!(session.state().selected_category.as_deref(), Some("Fruta"));
    }

    #[test]
    fn test_select_item_only_when_visible() {
        let mut session = session();
        assert_eq!(session.select_item("1").map(|i| i.name.as_str()), Some("Maçã"));

        session.apply(UserIntent::QueryChanged("banana".to_string()));
        assert!(session.select_item("1").is_none());
        assert_eq!(session.select_item("2").map(|i| i.name.as_str()), Some("Banana"));
    }
}
