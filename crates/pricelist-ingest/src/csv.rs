//! CSV file reading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ::csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A fully read CSV file: header line plus data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    /// Data rows, each padded or truncated to `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

/// Reads a comma-delimited, UTF-8 CSV file with a header line.
///
/// Header names and cell values are kept verbatim apart from a leading
/// byte-order mark. Blank lines are skipped. The file handle is closed before
/// this function returns, on success and on error.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] / [`IngestError::FileRead`] for I/O failures
/// - [`IngestError::InvalidEncoding`] when the content is not UTF-8
/// - [`IngestError::NoHeaderDetected`] for an empty file or blank header line
/// - [`IngestError::CsvParse`] for malformed CSV
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::from_csv(path.to_path_buf(), e))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::from_csv(path.to_path_buf(), e))?;
        let row: Vec<String> = (0..headers.len())
            .map(|idx| record.get(idx).unwrap_or("").to_string())
            .collect();
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}
