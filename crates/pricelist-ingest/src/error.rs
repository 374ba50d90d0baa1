//! Error types for price-list ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a catalog load.
///
/// Every variant is fatal for the whole load; no partial catalog is returned.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// File content is not valid UTF-8.
    #[error("invalid UTF-8 in {path}: {detail}")]
    InvalidEncoding { path: PathBuf, detail: String },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File is empty or its header line has no column names.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },
}

impl IngestError {
    /// Classifies a `csv` crate error for `path`.
    pub(crate) fn from_csv(path: PathBuf, err: ::csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            ::csv::ErrorKind::Io(source) => Self::FileRead { path, source },
            ::csv::ErrorKind::Utf8 { err, .. } => Self::InvalidEncoding {
                path,
                detail: err.to_string(),
            },
            _ => Self::CsvParse { path, message },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_no_header_display() {
        let err = IngestError::NoHeaderDetected {
            path: PathBuf::from("empty.csv"),
        };
        assert_eq!(err.to_string(), "could not detect header row in empty.csv");
    }
}
