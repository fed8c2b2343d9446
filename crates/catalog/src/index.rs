//! Catalog building and indexing logic.
//!
//! Turns parsed items into a `Catalog`: keeps load order, builds the
//! id index and rejects collections whose ids are not unique.

use crate::categories::extract_categories;
use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;

impl Catalog {
    /// Load an item collection from a file.
    ///
    /// `.json` files are read as a JSON array; anything else is read as
    /// `id::name::category` lines.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading item collection from {:?}", path);

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let items = if is_json {
            parser::parse_items_json(path)?
        } else {
            parser::parse_items_dat(path)?
        };

        let catalog = Self::from_items(items)?;
        tracing::info!(
            "Loaded {} items in {} categories",
            catalog.len(),
            catalog.categories().len()
        );
        Ok(catalog)
    }

    /// Build a catalog from items already in memory.
    ///
    /// Order is preserved. Fails on the first repeated id.
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }
        Ok(Self { items, index })
    }

    /// Distinct categories in this catalog, sorted
    pub fn categories(&self) -> Vec<String> {
        extract_categories(&self.items)
    }

    /// The built-in demo collection: eight foods across three categories
    pub fn sample() -> Self {
        let items = vec![
            Item::new("1", "Maçã", "Fruta"),
            Item::new("2", "Banana", "Fruta"),
            Item::new("3", "Laranja", "Fruta"),
            Item::new("4", "Cenoura", "Vegetal"),
            Item::new("5", "Brócolis", "Vegetal"),
            Item::new("6", "Espinafre", "Vegetal"),
            Item::new("7", "Frango", "Carne"),
            Item::new("8", "Carne Bovina", "Carne"),
        ];
        let index = items
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.id.clone(), pos))
            .collect();
        Self { items, index }
    }
}
