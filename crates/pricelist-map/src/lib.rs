#![deny(unsafe_code)]

//! Column resolution for heterogeneous price lists.
//!
//! Source files name their columns differently. [`ColumnResolver`] maps raw
//! header names to [`CanonicalField`](pricelist_model::CanonicalField)s using an
//! [`AliasTable`](pricelist_model::AliasTable), either per row
//! ([`ColumnResolver::resolve`]) or once per file header ([`ColumnResolver::plan`]).

mod plan;
mod resolver;

pub use plan::{ColumnPlan, PlannedColumn};
pub use resolver::{ColumnResolver, RowLookup};
