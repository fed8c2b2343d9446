//! # Catalog Crate
//!
//! Item collections for the search filter: the record type, loading
//! from disk, and category extraction.
//!
//! ## Main Components
//!
//! - **types**: `Item` and the ordered `Catalog`
//! - **parser**: read `id::name::category` and JSON item files
//! - **index**: build and validate a `Catalog`
//! - **categories**: derive the sorted, distinct category set
//! - **error**: error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, extract_categories};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/items.dat"))?;
//! let categories = extract_categories(catalog.items());
//! ```

pub mod categories;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use categories::extract_categories;
pub use error::{CatalogError, Result};
pub use types::{Catalog, Item, ItemId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::sample();
        assert!(catalog.get_item("999").is_none());
    }

    #[test]
    fn test_into_items_keeps_order() {
        let items = Catalog::sample().into_items();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names[..3], ["Maçã", "Banana", "Laranja"]);
    }
}
