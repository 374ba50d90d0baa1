//! Catalog building from a directory of price lists.

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use pricelist_map::ColumnResolver;
use pricelist_model::{AliasTable, CanonicalField, Record};
use tracing::{debug, info, warn};

use crate::csv::read_csv_table;
use crate::discovery::{list_csv_files, source_name};
use crate::error::Result;

/// Normalized record set built once per run.
///
/// Records keep file order within each source and sources keep load order.
/// The catalog is read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Wraps an existing record set, e.g. synthetic data in tests.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Distinct source names in first-seen order.
    pub fn sources(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.records
            .iter()
            .map(|record| record.source.as_str())
            .filter(|source| seen.insert(*source))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Per-file load statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub source: String,
    /// Data rows read, including rows with no resolvable field.
    pub rows: usize,
    /// Canonical fields the file's header resolved.
    pub resolved: Vec<CanonicalField>,
}

/// Statistics for a whole catalog load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub files: Vec<FileSummary>,
}

impl LoadSummary {
    pub fn total_rows(&self) -> usize {
        self.files.iter().map(|file| file.rows).sum()
    }
}

/// Accumulates normalized records from price-list files.
#[derive(Debug)]
pub struct CatalogBuilder {
    resolver: ColumnResolver,
    records: Vec<Record>,
    summary: LoadSummary,
}

impl CatalogBuilder {
    pub fn new(aliases: AliasTable) -> Self {
        Self {
            resolver: ColumnResolver::new(aliases),
            records: Vec::new(),
            summary: LoadSummary::default(),
        }
    }

    /// Appends one record per data row of `path`.
    ///
    /// Rows whose header resolves no canonical field still produce a record
    /// carrying only the source name.
    pub fn load_file(&mut self, path: &Path) -> Result<&FileSummary> {
        let table = read_csv_table(path)?;
        let source = source_name(path);
        let plan = self.resolver.plan(&table.headers);
        if plan.is_empty() {
            warn!(
                source = %source,
                headers = ?table.headers,
                "no header matches a known alias"
            );
        }
        for column in plan.columns() {
            debug!(
                source = %source,
                field = %column.field,
                header = %column.header,
                "resolved column"
            );
        }

        self.records
            .extend(table.rows.iter().map(|row| plan.apply(row, &source)));
        debug!(source = %source, rows = table.rows.len(), "loaded file");

        self.summary.files.push(FileSummary {
            source,
            rows: table.rows.len(),
            resolved: plan.fields(),
        });
        Ok(&self.summary.files[self.summary.files.len() - 1])
    }

    /// Loads every CSV file in `dir`; the first failing file aborts the load.
    pub fn load_dir(&mut self, dir: &Path) -> Result<()> {
        for path in list_csv_files(dir)? {
            self.load_file(&path)?;
        }
        Ok(())
    }

    pub fn finish(self) -> (Catalog, LoadSummary) {
        (Catalog::from_records(self.records), self.summary)
    }
}

/// Builds a catalog from every CSV file in `dir`.
pub fn load_catalog(dir: &Path, aliases: AliasTable) -> Result<(Catalog, LoadSummary)> {
    let start = Instant::now();
    let mut builder = CatalogBuilder::new(aliases);
    builder.load_dir(dir)?;
    let (catalog, summary) = builder.finish();
    info!(
        dir = %dir.display(),
        file_count = summary.files.len(),
        record_count = catalog.len(),
        duration_ms = start.elapsed().as_millis(),
        "catalog loaded"
    );
    Ok((catalog, summary))
}
