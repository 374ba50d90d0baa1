//! Price-list ingestion utilities.
//!
//! This crate discovers price-list CSV files in a directory, reads them, and
//! normalizes every data row into a [`Record`](pricelist_model::Record).
//!
//! # Features
//!
//! - **File Discovery**: list `.csv` files in a source directory
//! - **CSV Loading**: read a header line plus data rows, strictly UTF-8
//! - **Catalog Building**: resolve each row's columns through an alias table and
//!   tag it with its source file
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pricelist_ingest::load_catalog;
//! use pricelist_model::AliasTable;
//!
//! let (catalog, summary) = load_catalog(Path::new("price_lists"), AliasTable::default())?;
//! println!("{} records from {} files", catalog.len(), summary.files.len());
//! ```

mod catalog;
mod csv;
mod discovery;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{CsvTable, read_csv_table};

// === File Discovery ===
pub use discovery::{list_csv_files, source_name};

// === Catalog ===
pub use catalog::{Catalog, CatalogBuilder, FileSummary, LoadSummary, load_catalog};
