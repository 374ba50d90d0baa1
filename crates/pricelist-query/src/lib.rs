//! Query engine for the price-list catalog.
//!
//! [`search`] filters records by a case-insensitive name fragment and optional
//! price/weight ranges, then ranks the matches by unit price (`price / weight`).
//! Missing prices count as 0 and missing weights as 1, both for filtering and
//! ranking. Non-numeric values and zero weights are reported as
//! [`ValueError`](pricelist_model::ValueError) rather than skipped.

mod engine;
mod query;

pub use engine::{RankedRecord, matches, rank, rank_with_unit_price, search, search_ranked};
pub use query::{Bounds, SearchQuery};

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, pricelist_model::ValueError>;
