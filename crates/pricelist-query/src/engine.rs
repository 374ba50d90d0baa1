use pricelist_model::Record;
use tracing::debug;

use crate::Result;
use crate::query::SearchQuery;

/// A search hit with its 1-based rank and unit price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRecord<'a> {
    pub position: usize,
    pub record: &'a Record,
    pub unit_price: f64,
}

/// Returns whether `record` satisfies `query`.
///
/// Predicates are checked in order (name, price, weight) and stop at the first
/// failure. A numeric field is parsed only when one of its bounds is set, so a
/// malformed value is reported only for records that reach that check.
pub fn matches(record: &Record, query: &SearchQuery) -> Result<bool> {
    let needle = query.name_fragment.to_lowercase();
    matches_lowercase(record, query, &needle)
}

fn matches_lowercase(record: &Record, query: &SearchQuery, needle: &str) -> Result<bool> {
    if !record.display_name().to_lowercase().contains(needle) {
        return Ok(false);
    }
    if query.price.is_bounded() && !query.price.contains(record.price_value()?) {
        return Ok(false);
    }
    if query.weight.is_bounded() && !query.weight.contains(record.weight_value()?) {
        return Ok(false);
    }
    Ok(true)
}

/// Orders records by ascending unit price and keeps the computed values.
///
/// The sort is stable: equal unit prices keep input order.
pub fn rank_with_unit_price<'a, I>(records: I) -> Result<Vec<RankedRecord<'a>>>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut keyed = records
        .into_iter()
        .map(|record| Ok((sort_key(record.unit_price()?), record)))
        .collect::<Result<Vec<(f64, &Record)>>>()?;
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(keyed
        .into_iter()
        .enumerate()
        .map(|(idx, (unit_price, record))| RankedRecord {
            position: idx + 1,
            record,
            unit_price,
        })
        .collect())
}

/// Orders records by ascending unit price (stable).
pub fn rank<'a, I>(records: I) -> Result<Vec<&'a Record>>
where
    I: IntoIterator<Item = &'a Record>,
{
    Ok(rank_with_unit_price(records)?
        .into_iter()
        .map(|ranked| ranked.record)
        .collect())
}

/// Filters `records` by `query` and ranks the matches by unit price.
pub fn search<'a>(records: &'a [Record], query: &SearchQuery) -> Result<Vec<&'a Record>> {
    Ok(search_ranked(records, query)?
        .into_iter()
        .map(|ranked| ranked.record)
        .collect())
}

/// Like [`search`], but keeps each hit's rank and unit price for display.
pub fn search_ranked<'a>(
    records: &'a [Record],
    query: &SearchQuery,
) -> Result<Vec<RankedRecord<'a>>> {
    let needle = query.name_fragment.to_lowercase();
    let mut hits = Vec::new();
    for record in records {
        if matches_lowercase(record, query, &needle)? {
            hits.push(record);
        }
    }
    let ranked = rank_with_unit_price(hits)?;
    debug!(
        fragment = %query.name_fragment,
        scanned = records.len(),
        matched = ranked.len(),
        "search complete"
    );
    Ok(ranked)
}

// -0.0 and 0.0 compare as a tie so the sort stays stable between them.
fn sort_key(unit_price: f64) -> f64 {
    if unit_price == 0.0 { 0.0 } else { unit_price }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Bounds;
    use pricelist_model::ValueError;

    fn milk_catalog() -> Vec<Record> {
        vec![
            Record::new("b.csv")
                .with_name("Milk Powder")
                .with_price("300")
                .with_weight("0.5"),
            Record::new("a.csv")
                .with_name("Milk")
                .with_price("80")
                .with_weight("1"),
        ]
    }

    fn names<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|r| r.display_name()).collect()
    }

    #[test]
    fn test_search_ranks_by_unit_price() {
        let catalog = milk_catalog();
        let hits = search(&catalog, &SearchQuery::new("milk")).unwrap();
        assert_eq!(names(&hits), vec!["Milk", "Milk Powder"]);
    }

    #[test]
    fn test_min_price_excludes_cheaper_record() {
        let catalog = milk_catalog();
        let query = SearchQuery::new("milk").with_price(Bounds::at_least(100.0));
        let hits = search(&catalog, &query).unwrap();
        assert_eq!(names(&hits), vec!["Milk Powder"]);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let catalog = milk_catalog();
        let hits = search(&catalog, &SearchQuery::new("POWDER")).unwrap();
        assert_eq!(names(&hits), vec!["Milk Powder"]);
    }

    #[test]
    fn test_missing_name_only_matches_empty_fragment() {
        let catalog = vec![Record::new("x.csv").with_price("5")];
        assert!(search(&catalog, &SearchQuery::new("a")).unwrap().is_empty());
        assert_eq!(search(&catalog, &SearchQuery::all()).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_values_use_defaults_in_bounds() {
        let catalog = vec![Record::new("x.csv").with_name("Salt")];
        let zero_price = SearchQuery::new("").with_price(Bounds::at_most(0.0));
        assert_eq!(search(&catalog, &zero_price).unwrap().len(), 1);
        let unit_weight = SearchQuery::new("").with_weight(Bounds::new(Some(1.0), Some(1.0)));
        assert_eq!(search(&catalog, &unit_weight).unwrap().len(), 1);
    }

    #[test]
    fn test_record_without_price_and_weight_sorts_first() {
        let catalog = vec![
            Record::new("a.csv").with_name("Tea").with_price("1"),
            Record::new("b.csv").with_name("Mystery"),
        ];
        let hits = search(&catalog, &SearchQuery::all()).unwrap();
        assert_eq!(names(&hits), vec!["Mystery", "Tea"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let catalog = vec![
            Record::new("a.csv").with_name("A").with_price("10").with_weight("2"),
            Record::new("b.csv").with_name("B").with_price("5").with_weight("1"),
            Record::new("c.csv").with_name("C").with_price("-0").with_weight("1"),
            Record::new("d.csv").with_name("D"),
        ];
        let hits = search(&catalog, &SearchQuery::all()).unwrap();
        assert_eq!(names(&hits), vec!["C", "D", "A", "B"]);
    }

    #[test]
    fn test_zero_weight_fails_ranking() {
        let catalog = vec![Record::new("a.csv").with_name("Air").with_weight("0")];
        let err = search(&catalog, &SearchQuery::all()).unwrap_err();
        assert!(matches!(err, ValueError::DivisionByZero { .. }));
    }

    #[test]
    fn test_bad_price_propagates_from_filter() {
        let catalog = vec![Record::new("a.csv").with_name("Tea").with_price("n/a")];
        let query = SearchQuery::new("tea").with_price(Bounds::at_least(1.0));
        let err = search(&catalog, &query).unwrap_err();
        assert!(matches!(err, ValueError::InvalidNumber { .. }));
    }

    #[test]
    fn test_non_finite_price_is_not_ranked() {
        let catalog = vec![
            Record::new("a.csv").with_name("A").with_price("NaN"),
            Record::new("b.csv").with_name("B").with_price("-NaN"),
            Record::new("c.csv").with_name("C").with_price("5"),
        ];
        let err = search(&catalog, &SearchQuery::all()).unwrap_err();
        assert!(matches!(err, ValueError::InvalidNumber { .. }));

        let catalog = vec![Record::new("a.csv").with_name("Ghost").with_price("inf")];
        let query = SearchQuery::all().with_price(Bounds::at_least(100.0));
        assert!(search(&catalog, &query).is_err());
    }

    #[test]
    fn test_bad_value_outside_name_filter_is_not_parsed() {
        let catalog = vec![
            Record::new("a.csv").with_name("Tea").with_price("n/a"),
            Record::new("b.csv").with_name("Milk").with_price("80"),
        ];
        let hits = search(&catalog, &SearchQuery::new("milk")).unwrap();
        assert_eq!(names(&hits), vec!["Milk"]);
    }

    #[test]
    fn test_search_ranked_positions() {
        let catalog = milk_catalog();
        let ranked = search_ranked(&catalog, &SearchQuery::all()).unwrap();
        assert_eq!(ranked[0].position, 1);
        assert_eq!(ranked[0].unit_price, 80.0);
        assert_eq!(ranked[1].position, 2);
        assert_eq!(ranked[1].unit_price, 600.0);
    }

    #[test]
    fn test_matches_single_record() {
        let record = Record::new("a.csv").with_name("Milk").with_price("80");
        assert!(matches(&record, &SearchQuery::new("mil")).unwrap());
        let expensive = SearchQuery::new("mil").with_price(Bounds::at_least(81.0));
        assert!(!matches(&record, &expensive).unwrap());
    }
}
