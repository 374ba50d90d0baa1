//! Data model for the price-list catalog.
//!
//! - [`CanonicalField`]: the normalized attributes every source row maps into
//! - [`Record`]: one normalized row tagged with its source file
//! - [`AliasTable`]: ordered header aliases per canonical field
//! - [`ValueError`] / [`ModelError`]: typed failures for numeric values and configuration

pub mod alias;
pub mod error;
pub mod field;
pub mod record;

pub use alias::{AliasEntry, AliasTable};
pub use error::{ModelError, Result, ValueError};
pub use field::CanonicalField;
pub use record::{PRICE_DEFAULT, Record, WEIGHT_DEFAULT};
