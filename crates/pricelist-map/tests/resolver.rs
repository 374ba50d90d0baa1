use std::collections::BTreeMap;

use pricelist_map::ColumnResolver;
use pricelist_model::{AliasTable, CanonicalField};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().copied().map(String::from).collect()
}

fn as_row(headers: &[String], cells: &[&str]) -> BTreeMap<String, String> {
    headers
        .iter()
        .cloned()
        .zip(cells.iter().map(|cell| (*cell).to_string()))
        .collect()
}

#[test]
fn default_table_resolves_supplier_headers() {
    let resolver = ColumnResolver::new(AliasTable::default());
    let header = headers(&["товар", "розница", "масса", "поставщик"]);
    let row = as_row(&header, &["Гречка", "95", "0.9", "ООО Ромашка"]);

    let record = resolver.resolve_record(&row, "supplier.csv");
    assert_eq!(record.name.as_deref(), Some("Гречка"));
    assert_eq!(record.price.as_deref(), Some("95"));
    assert_eq!(record.weight.as_deref(), Some("0.9"));
}

#[test]
fn plan_matches_per_row_resolution() {
    let resolver = ColumnResolver::new(AliasTable::default());
    let header = headers(&["наименование", "название", "вес", "фасовка", "цена"]);
    let rows = [
        ["Соль", "Соль поваренная", "1", "1.5", "20"],
        ["Сахар", "", "", "2", "abc"],
    ];

    let plan = resolver.plan(&header);
    assert_eq!(plan.header(CanonicalField::Name), Some("название"));
    assert_eq!(plan.header(CanonicalField::Weight), Some("фасовка"));

    for cells in rows {
        let owned: Vec<String> = cells.iter().copied().map(String::from).collect();
        let planned = plan.apply(&owned, "mixed.csv");
        let per_row = resolver.resolve_record(&as_row(&header, &cells), "mixed.csv");
        assert_eq!(planned, per_row);
    }
}

#[test]
fn headers_without_aliases_produce_empty_plan() {
    let resolver = ColumnResolver::new(AliasTable::default());
    let plan = resolver.plan(&headers(&["sku", "qty"]));
    assert!(plan.is_empty());
    assert!(plan.fields().is_empty());
}
