//! Filter state and category selection.

use serde::{Deserialize, Serialize};

/// The user-controlled inputs to filtering.
///
/// `selected_category == None` means no category restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free text as typed; normalization happens only at match time
    pub query: String,
    pub selected_category: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff either input differs from its default.
    ///
    /// This drives the visibility of the "clear" affordance.
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty() || self.selected_category.is_some()
    }
}

/// What a category click points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryTarget {
    /// The "all" button
    All,
    Named(String),
}

impl From<Option<&str>> for CategoryTarget {
    fn from(category: Option<&str>) -> Self {
        match category {
            Some(name) => CategoryTarget::Named(name.to_string()),
            None => CategoryTarget::All,
        }
    }
}

/// How clicking a named category interacts with the current selection.
///
/// Both policies send `All` to "no restriction".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// A named category always becomes the selection
    #[default]
    Overwrite,
    /// Clicking the already-selected category clears the restriction
    Toggle,
}

impl SelectionPolicy {
    /// The selection that results from clicking `target` while `current` is selected.
    pub fn resolve(self, current: Option<&str>, target: CategoryTarget) -> Option<String> {
        match (self, target) {
            (_, CategoryTarget::All) => None,
            (SelectionPolicy::Toggle, CategoryTarget::Named(name))
                if current == Some(name.as_str()) =>
            {
                None
            }
            (_, CategoryTarget::Named(name)) => Some(name),
        }
    }
}
