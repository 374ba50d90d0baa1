//! Report export step shared by `search` and `export`.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use pricelist_model::{Record, ValueError};
use pricelist_report::{ReportOptions, ReportOutcome, write_html_report};
use tracing::error;

/// Report file name used when no output path is given.
pub const DEFAULT_REPORT_NAME: &str = "output.html";

/// What the export step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Written { path: PathBuf, pages: usize },
    Empty,
    /// Writing failed; the message was already printed.
    Failed(String),
}

/// Default report location for a source directory.
pub fn default_report_path(source_dir: &Path) -> PathBuf {
    source_dir.join(DEFAULT_REPORT_NAME)
}

/// Write the report and print a one-line status to `out`.
///
/// Write failures become [`ExportStatus::Failed`]. A record whose price or
/// weight cannot be ranked is returned as an error instead, since it means the
/// catalog itself is unusable.
pub fn export_report<W: Write>(
    out: &mut W,
    path: &Path,
    records: &[Record],
    options: &ReportOptions,
) -> Result<ExportStatus> {
    match write_html_report(path, records, options) {
        Ok(ReportOutcome::Written { path, pages, .. }) => {
            writeln!(out, "HTML report written: {}", path.display())?;
            Ok(ExportStatus::Written { path, pages })
        }
        Ok(ReportOutcome::Empty) => {
            writeln!(out, "No records to export to HTML.")?;
            Ok(ExportStatus::Empty)
        }
        Err(err) if err.downcast_ref::<ValueError>().is_some() => Err(err),
        Err(err) => {
            let message = format!("{err:#}");
            error!(path = %path.display(), error = %message, "report export failed");
            writeln!(out, "HTML report failed: {message}")?;
            Ok(ExportStatus::Failed(message))
        }
    }
}
