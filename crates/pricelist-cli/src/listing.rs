//! Terminal tables for search results and the alias table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pricelist_model::AliasTable;
use pricelist_query::RankedRecord;
use pricelist_report::format_unit_price;

/// Ranked, 1-indexed result table.
pub fn results_table(ranked: &[RankedRecord<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Price"),
        header_cell("Weight"),
        header_cell("File"),
        header_cell("Unit price"),
    ]);
    apply_results_style(&mut table);
    for index in [0, 2, 3, 5] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for entry in ranked {
        let record = entry.record;
        table.add_row(vec![
            dim_cell(entry.position),
            optional_cell(record.name.as_deref()),
            optional_cell(record.price.as_deref()),
            optional_cell(record.weight.as_deref()),
            Cell::new(&record.source),
            Cell::new(format_unit_price(entry.unit_price))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

/// Canonical fields with their aliases in priority order.
pub fn aliases_table(aliases: &AliasTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Aliases (priority order)")]);
    apply_alias_style(&mut table);
    for entry in aliases.entries() {
        let list = if entry.aliases.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(entry.aliases.join(", "))
        };
        table.add_row(vec![
            Cell::new(entry.field)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            list,
        ]);
    }
    table
}

fn apply_results_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn apply_alias_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
