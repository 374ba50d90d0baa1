use pricelist_model::{CanonicalField, Record};

/// A canonical field bound to a concrete header column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedColumn {
    pub field: CanonicalField,
    /// Alias that matched.
    pub header: String,
    /// Zero-based column index in the file's header line.
    pub index: usize,
}

/// Per-file resolution of canonical fields to header columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPlan {
    columns: Vec<PlannedColumn>,
}

impl ColumnPlan {
    pub(crate) fn new(columns: Vec<PlannedColumn>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[PlannedColumn] {
        &self.columns
    }

    pub fn column(&self, field: CanonicalField) -> Option<usize> {
        self.find(field).map(|column| column.index)
    }

    pub fn header(&self, field: CanonicalField) -> Option<&str> {
        self.find(field).map(|column| column.header.as_str())
    }

    /// True when no canonical field matched any header.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Resolved canonical fields in resolution order.
    pub fn fields(&self) -> Vec<CanonicalField> {
        self.columns.iter().map(|column| column.field).collect()
    }

    /// Builds a record from one data row laid out like the planned header.
    ///
    /// Cells missing from a short row resolve to the empty string.
    pub fn apply(&self, cells: &[String], source: &str) -> Record {
        let mut record = Record::new(source);
        for column in &self.columns {
            let value = cells.get(column.index).map(String::as_str).unwrap_or("");
            record.set(column.field, value.to_string());
        }
        record
    }

    fn find(&self, field: CanonicalField) -> Option<&PlannedColumn> {
        self.columns.iter().find(|column| column.field == field)
    }
}
