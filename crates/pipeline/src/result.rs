//! Filter results and their count summary.

use catalog::Item;
use serde::Serialize;

/// Which of the three count states a result is in.
///
/// The engine reports the state; wording belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSummary {
    NoResults,
    Singular,
    Plural,
}

impl ResultSummary {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => ResultSummary::NoResults,
            1 => ResultSummary::Singular,
            _ => ResultSummary::Plural,
        }
    }
}

/// The visible subset of an item collection for one filter state.
///
/// Items are borrowed from the caller's collection, in original order.
/// The count is always the length of `visible_items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterResult<'a> {
    pub visible_items: Vec<&'a Item>,
}

impl<'a> FilterResult<'a> {
    pub fn new(visible_items: Vec<&'a Item>) -> Self {
        Self { visible_items }
    }

    pub fn count(&self) -> usize {
        self.visible_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible_items.is_empty()
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::from_count(self.count())
    }

    /// Whether an item with this id is visible
    pub fn contains(&self, id: &str) -> bool {
        self.visible_items.iter().any(|item| item.id == id)
    }

    /// Look up a visible item by id
    pub fn get(&self, id: &str) -> Option<&'a Item> {
        self.visible_items.iter().copied().find(|item| item.id == id)
    }

    /// Ids of the visible items, in order
    pub fn ids(&self) -> Vec<&'a str> {
        self.visible_items.iter().map(|item| item.id.as_str()).collect()
    }
}
