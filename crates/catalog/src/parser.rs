//! Parsers for item collection files.
//!
//! Two formats are accepted:
//! - `.dat`-style text: one `id::name::category` record per line
//! - JSON: an array of `{ "id", "name", "category" }` objects
//!
//! Both preserve the order records appear in the file.

use crate::error::{CatalogError, Result};
use crate::types::Item;
use std::path::Path;

const FIELD_SEPARATOR: &str = "::";
const FIELD_COUNT: usize = 3;

/// Read a UTF-8 file, mapping a missing file to `FileNotFound`
fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse an item file in `id::name::category` format
pub fn parse_items_dat(path: &Path) -> Result<Vec<Item>> {
    let content = read_file(path)?;
    parse_items_dat_str(&content, &file_label(path))
}

/// Parse `id::name::category` lines from an in-memory string.
///
/// Blank lines and lines starting with `#` are skipped. Fields are
/// trimmed; an empty field is a parse error.
pub fn parse_items_dat_str(content: &str, file: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line_trimmed.split(FIELD_SEPARATOR).map(str::trim).collect();
        if parts.len() != FIELD_COUNT {
            return Err(CatalogError::FieldCountMismatch {
                expected: FIELD_COUNT,
                found: parts.len(),
                line: line_no,
            });
        }

        let field = |pos: usize, label: &str| -> Result<String> {
            let value = parts[pos];
            if value.is_empty() {
                return Err(CatalogError::ParseError {
                    file: file.to_string(),
                    line: line_no,
                    reason: format!("Missing {}", label),
                });
            }
            Ok(value.to_string())
        };

        items.push(Item {
            id: field(0, "id")?,
            name: field(1, "name")?,
            category: field(2, "category")?,
        });
    }
    Ok(items)
}

/// Parse an item file containing a JSON array of items
pub fn parse_items_json(path: &Path) -> Result<Vec<Item>> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| CatalogError::JsonError {
        file: file_label(path),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dat_lines() {
        let content = "1::Maçã::Fruta\n\n# comment\n2:: Cenoura ::Vegetal\n";
        let items = parse_items_dat_str(content, "items.dat").unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Item::new("1", "Maçã", "Fruta"));
        assert_eq!(items[1].name, "Cenoura");
    }

    #[test]
    fn test_field_count_mismatch() {
        let err = parse_items_dat_str("1::Maçã::Fruta\n2::Banana\n", "items.dat").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::FieldCountMismatch { expected: 3, found: 2, line: 2 }
        ));
    }

    #[test]
    fn test_empty_field_reports_line() {
        let err = parse_items_dat_str("1::::Fruta", "items.dat").unwrap_err();
        match err {
            CatalogError::ParseError { line, reason, .. } => {
                assert_eq!(line, 1);
                assert_eq!(reason, "Missing name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = parse_items_dat(Path::new("/nonexistent/items.dat")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }
}
