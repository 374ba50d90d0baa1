//! Inline style and script embedded in every report.
//!
//! Both are compiled in with `include_str!()` so a report is a single file.

/// Table, form, and pagination styling.
pub const STYLE: &str = include_str!("../assets/report.css");

/// Client-side filtering and pagination over the embedded rows.
pub const SCRIPT: &str = include_str!("../assets/report.js");
