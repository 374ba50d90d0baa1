//! HTML report output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use pricelist_model::{PRICE_DEFAULT, Record, WEIGHT_DEFAULT};
use pricelist_query::{RankedRecord, rank_with_unit_price};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::info;

use crate::assets::{SCRIPT, STYLE};
use crate::common::{
    DEFAULT_PAGE_SIZE, element, ensure_parent_dir, format_unit_price, page_count,
    write_raw_element, write_text_element,
};

const COLUMN_HEADERS: [&str; 6] = ["#", "Name", "Price", "Weight", "File", "Unit price"];

/// Options for HTML report output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Rows per page; must be at least 1.
    pub page_size: usize,
    pub title: String,
    /// Value of the document's `lang` attribute.
    pub lang: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            title: "Price list".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// Result of [`write_html_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Written {
        path: PathBuf,
        records: usize,
        pages: usize,
    },
    /// The catalog was empty; no file was created.
    Empty,
}

/// Write the report for `records` to `path`.
///
/// Records are ranked before the file is opened, so a record that cannot be
/// ranked leaves `path` untouched. The error then wraps a
/// [`ValueError`](pricelist_model::ValueError) that callers can recover with
/// `downcast_ref`.
pub fn write_html_report(
    path: &Path,
    records: &[Record],
    options: &ReportOptions,
) -> Result<ReportOutcome> {
    if records.is_empty() {
        return Ok(ReportOutcome::Empty);
    }
    let start = Instant::now();
    let ranked = prepare(records, options)?;

    ensure_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_document(&mut writer, &ranked, options)?;
    writer
        .flush()
        .with_context(|| format!("write {}", path.display()))?;

    let pages = page_count(ranked.len(), options.page_size);
    info!(
        path = %path.display(),
        records = ranked.len(),
        pages,
        duration_ms = start.elapsed().as_millis(),
        "HTML report written"
    );
    Ok(ReportOutcome::Written {
        path: path.to_path_buf(),
        records: ranked.len(),
        pages,
    })
}

/// Render the report document into `out`.
pub fn render_html<W: Write>(out: W, records: &[Record], options: &ReportOptions) -> Result<()> {
    let ranked = prepare(records, options)?;
    write_document(out, &ranked, options)
}

/// Render the report document into a string.
pub fn render_html_string(records: &[Record], options: &ReportOptions) -> Result<String> {
    let mut buffer = Vec::new();
    render_html(&mut buffer, records, options)?;
    String::from_utf8(buffer).context("report is not valid UTF-8")
}

fn prepare<'a>(records: &'a [Record], options: &ReportOptions) -> Result<Vec<RankedRecord<'a>>> {
    ensure!(options.page_size > 0, "page size must be at least 1");
    Ok(rank_with_unit_price(records)?)
}

fn write_document<W: Write>(
    out: W,
    ranked: &[RankedRecord<'_>],
    options: &ReportOptions,
) -> Result<()> {
    let mut xml = Writer::new_with_indent(out, b' ', 2);

    xml.write_event(Event::DocType(BytesText::from_escaped("html")))?;
    xml.write_event(Event::Start(element("html", &[("lang", options.lang.as_str())])))?;

    xml.write_event(Event::Start(BytesStart::new("head")))?;
    xml.write_event(Event::Empty(element("meta", &[("charset", "utf-8")])))?;
    xml.write_event(Event::Empty(element(
        "meta",
        &[
            ("name", "viewport"),
            ("content", "width=device-width, initial-scale=1"),
        ],
    )))?;
    write_text_element(&mut xml, "title", &[], &options.title)?;
    write_raw_element(&mut xml, "style", STYLE)?;
    xml.write_event(Event::End(BytesEnd::new("head")))?;

    xml.write_event(Event::Start(BytesStart::new("body")))?;
    xml.write_event(Event::Start(element("div", &[("class", "container")])))?;
    write_text_element(&mut xml, "h1", &[], &options.title)?;
    write_search_form(&mut xml)?;
    let summary = format!("Showing {} of {} records", ranked.len(), ranked.len());
    write_text_element(&mut xml, "p", &[("id", "result-count")], &summary)?;
    write_table(&mut xml, ranked)?;
    write_pagination(&mut xml, ranked.len(), options.page_size)?;
    xml.write_event(Event::End(BytesEnd::new("div")))?;
    write_raw_element(&mut xml, "script", SCRIPT)?;
    xml.write_event(Event::End(BytesEnd::new("body")))?;

    xml.write_event(Event::End(BytesEnd::new("html")))?;
    xml.get_mut().write_all(b"\n")?;
    Ok(())
}

fn write_search_form<W: Write>(xml: &mut Writer<W>) -> Result<()> {
    xml.write_event(Event::Start(element("form", &[("id", "search-form")])))?;
    xml.write_event(Event::Empty(element(
        "input",
        &[
            ("type", "text"),
            ("id", "search-name"),
            ("placeholder", "Name"),
        ],
    )))?;
    for (id, placeholder) in [
        ("search-min-price", "Min price"),
        ("search-max-price", "Max price"),
        ("search-min-weight", "Min weight"),
        ("search-max-weight", "Max weight"),
    ] {
        xml.write_event(Event::Empty(element(
            "input",
            &[
                ("type", "number"),
                ("step", "any"),
                ("id", id),
                ("placeholder", placeholder),
            ],
        )))?;
    }
    write_text_element(
        xml,
        "button",
        &[("type", "submit"), ("id", "search-button")],
        "Search",
    )?;
    xml.write_event(Event::End(BytesEnd::new("form")))?;
    Ok(())
}

fn write_table<W: Write>(xml: &mut Writer<W>, ranked: &[RankedRecord<'_>]) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("table")))?;

    xml.write_event(Event::Start(BytesStart::new("thead")))?;
    xml.write_event(Event::Start(BytesStart::new("tr")))?;
    for header in COLUMN_HEADERS {
        write_text_element(xml, "th", &[], header)?;
    }
    xml.write_event(Event::End(BytesEnd::new("tr")))?;
    xml.write_event(Event::End(BytesEnd::new("thead")))?;

    xml.write_event(Event::Start(element("tbody", &[("id", "product-table-body")])))?;
    for entry in ranked {
        write_row(xml, entry)?;
    }
    xml.write_event(Event::End(BytesEnd::new("tbody")))?;

    xml.write_event(Event::End(BytesEnd::new("table")))?;
    Ok(())
}

fn write_row<W: Write>(xml: &mut Writer<W>, entry: &RankedRecord<'_>) -> Result<()> {
    let record = entry.record;
    let price_default = PRICE_DEFAULT.to_string();
    let weight_default = WEIGHT_DEFAULT.to_string();
    let data_price = record.price.as_deref().unwrap_or(&price_default);
    let data_weight = record.weight.as_deref().unwrap_or(&weight_default);

    xml.write_event(Event::Start(element(
        "tr",
        &[
            ("data-name", record.display_name()),
            ("data-price", data_price),
            ("data-weight", data_weight),
        ],
    )))?;
    write_text_element(xml, "td", &[], &entry.position.to_string())?;
    write_text_element(xml, "td", &[], record.display_name())?;
    write_text_element(xml, "td", &[], record.price.as_deref().unwrap_or(""))?;
    write_text_element(xml, "td", &[], record.weight.as_deref().unwrap_or(""))?;
    write_text_element(xml, "td", &[], &record.source)?;
    write_text_element(xml, "td", &[], &format_unit_price(entry.unit_price))?;
    xml.write_event(Event::End(BytesEnd::new("tr")))?;
    Ok(())
}

fn write_pagination<W: Write>(xml: &mut Writer<W>, records: usize, page_size: usize) -> Result<()> {
    let page_size_attr = page_size.to_string();
    xml.write_event(Event::Start(BytesStart::new("nav")))?;
    xml.write_event(Event::Start(element(
        "ul",
        &[
            ("class", "pagination"),
            ("id", "pagination"),
            ("data-page-size", page_size_attr.as_str()),
        ],
    )))?;
    for page in 1..=page_count(records, page_size) {
        let label = page.to_string();
        xml.write_event(Event::Start(element("li", &[("class", "page-item")])))?;
        write_text_element(
            xml,
            "a",
            &[("class", "page-link"), ("href", "#"), ("data-page", label.as_str())],
            &label,
        )?;
        xml.write_event(Event::End(BytesEnd::new("li")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("ul")))?;
    xml.write_event(Event::End(BytesEnd::new("nav")))?;
    Ok(())
}
