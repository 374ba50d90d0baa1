//! Error types for catalog values and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::field::CanonicalField;

/// Failures raised while interpreting a record's numeric fields.
///
/// Both variants end an interactive session; they are never isolated per record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// A stored price or weight is not a number.
    #[error("invalid {field} value '{value}' for '{name}' in {source_file}")]
    InvalidNumber {
        field: CanonicalField,
        value: String,
        name: String,
        source_file: String,
    },

    /// A record with weight 0 reached unit-price computation.
    #[error("division by zero: weight is 0 for '{name}' in {source_file}")]
    DivisionByZero { name: String, source_file: String },
}

/// Errors from loading or validating the alias table.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failed to read an alias table file.
    #[error("failed to read alias table {path}: {source}")]
    AliasRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Alias table document is not valid TOML or has the wrong shape.
    #[error("invalid alias table: {0}")]
    AliasSyntax(#[from] toml::de::Error),

    /// The same canonical field was declared twice.
    #[error("canonical field '{field}' is declared more than once")]
    DuplicateField { field: CanonicalField },
}

/// Result type for model configuration operations.
pub type Result<T> = std::result::Result<T, ModelError>;
