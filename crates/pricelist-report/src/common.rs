//! Shared helpers for report generation.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Rows per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Number of pages needed for `records` rows; `page_size` must be non-zero.
pub fn page_count(records: usize, page_size: usize) -> usize {
    records.div_ceil(page_size)
}

/// Unit price as shown in the report table.
pub fn format_unit_price(unit_price: f64) -> String {
    format!("{unit_price:.1}")
}

/// Create the parent directory of `path` when it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

/// Build a start tag with attributes in the given order.
pub fn element<'a>(name: &'a str, attributes: &[(&str, &str)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for attribute in attributes {
        start.push_attribute(*attribute);
    }
    start
}

/// Write `<name attrs>text</name>` with the text escaped.
pub fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(element(name, attributes)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write `<name>raw</name>` without escaping, for inline style and script blocks.
pub fn write_raw_element<W: Write>(writer: &mut Writer<W>, name: &str, raw: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(raw)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
