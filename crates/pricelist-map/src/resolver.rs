use std::collections::{BTreeMap, HashMap};

use pricelist_model::{AliasTable, CanonicalField, Record};

use crate::plan::{ColumnPlan, PlannedColumn};

/// Read access to one row keyed by raw header name.
pub trait RowLookup {
    /// Returns the raw value under `header`, if the row has that header.
    fn get(&self, header: &str) -> Option<&str>;
}

impl RowLookup for BTreeMap<String, String> {
    fn get(&self, header: &str) -> Option<&str> {
        BTreeMap::get(self, header).map(String::as_str)
    }
}

impl RowLookup for HashMap<String, String> {
    fn get(&self, header: &str) -> Option<&str> {
        HashMap::get(self, header).map(String::as_str)
    }
}

impl RowLookup for [(&str, &str)] {
    fn get(&self, header: &str) -> Option<&str> {
        self.iter()
            .rev()
            .find(|(key, _)| *key == header)
            .map(|(_, value)| *value)
    }
}

/// Resolves raw headers to canonical fields using a priority-ordered alias table.
#[derive(Debug, Clone, Default)]
pub struct ColumnResolver {
    aliases: AliasTable,
}

impl ColumnResolver {
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Returns the value of the first alias of `field` present in `row`.
    ///
    /// Matching is exact and case-sensitive. Once an alias is present its value
    /// is returned unchanged, even when empty; lower-priority aliases are not
    /// consulted.
    pub fn resolve<'r, R>(&self, row: &'r R, field: CanonicalField) -> Option<&'r str>
    where
        R: RowLookup + ?Sized,
    {
        self.aliases
            .aliases(field)
            .iter()
            .find_map(|alias| row.get(alias))
    }

    /// Builds a record from `row`, resolving every canonical field.
    pub fn resolve_record<R>(&self, row: &R, source: &str) -> Record
    where
        R: RowLookup + ?Sized,
    {
        let mut record = Record::new(source);
        for field in CanonicalField::ALL {
            if let Some(value) = self.resolve(row, field) {
                record.set(field, value.to_string());
            }
        }
        record
    }

    /// Precomputes which header column each canonical field resolves to.
    ///
    /// All rows of a file share its header line, so applying the plan to a row
    /// gives the same record as [`ColumnResolver::resolve_record`]. When a header
    /// name repeats, the rightmost column is used.
    pub fn plan(&self, headers: &[String]) -> ColumnPlan {
        let columns = CanonicalField::ALL
            .into_iter()
            .filter_map(|field| {
                self.aliases.aliases(field).iter().find_map(|alias| {
                    headers
                        .iter()
                        .rposition(|header| header == alias)
                        .map(|index| PlannedColumn {
                            field,
                            header: alias.clone(),
                            index,
                        })
                })
            })
            .collect();
        ColumnPlan::new(columns)
    }
}
