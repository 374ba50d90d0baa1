//! Header alias configuration.
//!
//! An [`AliasTable`] is an ordered list of canonical field to alias-list pairs.
//! Alias order is resolution priority: the first alias present in a file's header
//! wins. Tables can be built in code or loaded from TOML:
//!
//! ```toml
//! [[fields]]
//! field = "name"
//! aliases = ["product", "item"]
//!
//! [[fields]]
//! field = "price"
//! aliases = ["price", "retail"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ModelError, Result};
use crate::field::CanonicalField;

/// Aliases registered for one canonical field, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AliasEntry {
    pub field: CanonicalField,
    pub aliases: Vec<String>,
}

impl AliasEntry {
    pub fn new<I, S>(field: CanonicalField, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field,
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered alias table used to resolve raw headers into canonical fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    fields: Vec<AliasEntry>,
}

#[derive(Deserialize)]
struct AliasDocument {
    fields: Vec<AliasEntry>,
}

impl AliasTable {
    /// Builds a table from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateField`] if a canonical field appears twice.
    pub fn new(fields: Vec<AliasEntry>) -> Result<Self> {
        for (idx, entry) in fields.iter().enumerate() {
            if fields[..idx].iter().any(|prev| prev.field == entry.field) {
                return Err(ModelError::DuplicateField { field: entry.field });
            }
        }
        Ok(Self { fields })
    }

    /// Parses a TOML alias document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let document: AliasDocument = toml::from_str(text)?;
        Self::new(document.fields)
    }

    /// Reads and parses a TOML alias file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ModelError::AliasRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Aliases for `field` in priority order; empty when the field is not configured.
    pub fn aliases(&self, field: CanonicalField) -> &[String] {
        self.fields
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.aliases.as_slice())
            .unwrap_or(&[])
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.fields
    }
}

impl Default for AliasTable {
    /// Aliases used by the supplier price lists this tool was built for.
    fn default() -> Self {
        Self {
            fields: vec![
                AliasEntry::new(
                    CanonicalField::Name,
                    ["название", "продукт", "товар", "наименование"],
                ),
                AliasEntry::new(CanonicalField::Price, ["цена", "розница"]),
                AliasEntry::new(CanonicalField::Weight, ["фасовка", "масса", "вес"]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_priorities() {
        let table = AliasTable::default();
        assert_eq!(table.aliases(CanonicalField::Price), ["цена", "розница"]);
        assert_eq!(table.aliases(CanonicalField::Name)[0], "название");
        assert_eq!(table.entries().len(), 3);
    }

    #[test]
    fn test_parse_toml() {
        let table = AliasTable::from_toml_str(
            r#"
            [[fields]]
            field = "name"
            aliases = ["product", "item"]

            [[fields]]
            field = "weight"
            aliases = ["kg"]
            "#,
        )
        .unwrap();
        assert_eq!(table.aliases(CanonicalField::Name), ["product", "item"]);
        assert_eq!(table.aliases(CanonicalField::Weight), ["kg"]);
        assert!(table.aliases(CanonicalField::Price).is_empty());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = AliasTable::from_toml_str(
            r#"
            [[fields]]
            field = "currency"
            aliases = ["cur"]
            "#,
        );
        assert!(matches!(result, Err(ModelError::AliasSyntax(_))));
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let result = AliasTable::new(vec![
            AliasEntry::new(CanonicalField::Price, ["price"]),
            AliasEntry::new(CanonicalField::Price, ["cost"]),
        ]);
        assert!(matches!(
            result,
            Err(ModelError::DuplicateField {
                field: CanonicalField::Price
            })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[[fields]]\nfield = \"price\"\naliases = [\"cost\", \"price\"]\n"
        )
        .unwrap();
        let table = AliasTable::load(file.path()).unwrap();
        assert_eq!(table.aliases(CanonicalField::Price), ["cost", "price"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = AliasTable::load(Path::new("/nonexistent/aliases.toml"));
        assert!(matches!(result, Err(ModelError::AliasRead { .. })));
    }
}
