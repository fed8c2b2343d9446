//! Error types for the catalog crate.
//!
//! Loading an item collection can fail (missing file, malformed line,
//! duplicate id). Filtering a loaded collection cannot, so these errors
//! only ever surface while building a `Catalog`.

use thiserror::Error;

/// Errors that can occur while loading or validating an item collection
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON item file was not an array of `{id, name, category}` objects
    #[error("Invalid JSON in {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Line in an item file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Two items in the same collection share an id
    #[error("Duplicate item id: {id}")]
    DuplicateId { id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
