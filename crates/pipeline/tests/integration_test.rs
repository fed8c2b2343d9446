//! Integration tests for the filter engine.
//!
//! These walk through the same interactions a user has with the search
//! screen: typing, picking categories, clearing.

use catalog::{Catalog, Item};
use pipeline::{
    CategoryTarget, EngineConfig, FilterEngine, FilterSession, FilterState, ResultSummary,
    SelectionPolicy, UserIntent,
};

fn create_test_items() -> Vec<Item> {
    vec![
        Item::new("1", "Maçã", "Fruta"),
        Item::new("2", "Banana", "Fruta"),
        Item::new("3", "Cenoura", "Vegetal"),
        Item::new("4", "Brócolis", "Vegetal"),
        Item::new("5", "Frango", "Carne"),
    ]
}

fn named(category: &str) -> UserIntent {
    UserIntent::CategoryClicked(CategoryTarget::Named(category.to_string()))
}

fn query(text: &str) -> UserIntent {
    UserIntent::QueryChanged(text.to_string())
}

#[test]
fn test_no_filters_shows_everything() {
    let items = create_test_items();
    let engine = FilterEngine::default();

    let result = engine.compute_result(&items);
    assert_eq!(result.ids(), vec!["1", "2", "3", "4", "5"]);
    assert_eq!(result.summary(), ResultSummary::Plural);
}

#[test]
fn test_case_insensitive_query() {
    let items = create_test_items();
    let mut engine = FilterEngine::default();

    engine.set_query("maçã");
    let lower = engine.compute_result(&items).ids();
    engine.set_query("MAÇÃ");
    let upper = engine.compute_result(&items).ids();

    assert_eq!(lower, vec!["1"]);
    assert_eq!(lower, upper);
    assert_eq!(engine.compute_result(&items).summary(), ResultSummary::Singular);
}

#[test]
fn test_partial_query() {
    let items = create_test_items();
    let mut engine = FilterEngine::default();
    engine.set_query("an");

    let result = engine.compute_result(&items);
    assert_eq!(result.ids(), vec!["2", "5"]);
    assert_eq!(result.count(), 2);
}

#[test]
fn test_category_only() {
    let items = create_test_items();
    let mut engine = FilterEngine::default();
    engine.select_category(Some("Fruta"));

    assert_eq!(engine.compute_result(&items).ids(), vec!["1", "2"]);
}

#[test]
fn test_query_and_category_combined() {
    let items = create_test_items();
    let mut engine = FilterEngine::default();
    engine.set_query("o");
    engine.select_category(Some("Vegetal"));

    // Frango contains "o" but is Carne
    let result = engine.compute_result(&items);
    assert_eq!(result.ids(), vec!["3", "4"]);
    assert!(!result.contains("5"));
}

#[test]
fn test_no_results() {
    let items = create_test_items();
    let mut engine = FilterEngine::default();
    engine.set_query("xyz");

    let result = engine.compute_result(&items);
    assert_eq!(result.count(), 0);
    assert!(result.visible_items.is_empty());
    assert_eq!(result.summary(), ResultSummary::NoResults);
}

#[test]
fn test_clear_restores_everything() {
    let mut session = FilterSession::new(create_test_items(), EngineConfig::default());
    session.apply(query("maçã"));
    session.apply(named("Fruta"));
    assert_eq!(session.result().summary(), ResultSummary::Singular);

    session.apply(UserIntent::ClearClicked);
    assert_eq!(session.result().count(), 5);
    assert_eq!(session.state().query, "");
    assert!(!session.is_clear_visible());
}

#[test]
fn test_clear_visible_only_with_active_filters() {
    let mut session = FilterSession::new(create_test_items(), EngineConfig::default());
    assert!(!session.is_clear_visible());

    session.apply(query("a"));
    assert!(session.is_clear_visible());

    session.apply(query(""));
    assert!(!session.is_clear_visible());

    session.apply(named("Carne"));
    assert!(session.is_clear_visible());

    session.apply(UserIntent::CategoryClicked(CategoryTarget::All));
    assert!(!session.is_clear_visible());
}

#[test]
fn test_switching_categories() {
    let mut session = FilterSession::new(create_test_items(), EngineConfig::default());

    session.apply(named("Fruta"));
    assert_eq!(session.result().count(), 2);
    session.apply(named("Vegetal"));
    assert_eq!(session.result().count(), 2);
    session.apply(named("Carne"));
    assert_eq!(session.result().count(), 1);
    session.apply(UserIntent::CategoryClicked(CategoryTarget::All));
    assert_eq!(session.result().count(), 5);
}

#[test]
fn test_toggle_policy_end_to_end() {
    let config = EngineConfig::default().with_selection_policy(SelectionPolicy::Toggle);
    let mut session = FilterSession::new(create_test_items(), config);

    session.apply(named("Vegetal"));
    assert_eq!(session.result().count(), 2);
    session.apply(named("Vegetal"));
    assert_eq!(session.state(), &FilterState::default());
    assert_eq!(session.result().count(), 5);
}

#[test]
fn test_sample_catalog_scenario() {
    let mut session = FilterSession::from_catalog(Catalog::sample(), EngineConfig::default());
    assert_eq!(session.result().count(), 8);
    assert_eq!(session.categories(), vec!["Carne", "Fruta", "Vegetal"]);

    session.apply(query("an"));
    // Banana, Laranja, Frango
    assert_eq!(session.result().ids(), vec!["2", "3", "7"]);
}

#[test]
fn test_item_selection_reaches_host() {
    let session = FilterSession::new(create_test_items(), EngineConfig::default());
    let picked = session.select_item("1").cloned();
    assert_eq!(picked, Some(Item::new("1", "Maçã", "Fruta")));
}

#[test]
fn test_placeholder_from_config() {
    let config = EngineConfig {
        placeholder: "Encontrar alimentos...".to_string(),
        ..EngineConfig::default()
    };
    let engine = FilterEngine::new(config);
    assert_eq!(engine.placeholder(), "Encontrar alimentos...");
}
