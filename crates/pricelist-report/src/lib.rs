//! HTML report generation for the price-list catalog.
//!
//! The report is one self-contained HTML document holding every catalog record,
//! globally ranked by unit price. Filtering and pagination run client-side with
//! the same rules as the interactive search:
//!
//! - case-insensitive name substring
//! - inclusive, optional price and weight bounds
//! - missing price treated as 0, missing weight as 1

mod assets;
mod common;
mod html;

pub use common::{DEFAULT_PAGE_SIZE, format_unit_price, page_count};
pub use html::{
    ReportOptions, ReportOutcome, render_html, render_html_string, write_html_report,
};
