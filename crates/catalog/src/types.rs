//! Core domain types for filterable item collections.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for an item within one collection
pub type ItemId = String;

/// A single filterable record.
///
/// Items are owned by the caller. Nothing in this workspace mutates an
/// item after it has been constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Display name, the field free-text queries are matched against
    pub name: String,
    /// Category label, compared as an opaque identifier
    pub category: String,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }
}

/// An ordered, validated item collection.
///
/// Order is the order items were loaded in; filtering preserves it.
/// `index` maps each id to its position in `items`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) items: Vec<Item>,
    pub(crate) index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in load order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id
    pub fn get_item(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the catalog, handing the items to a new owner
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
