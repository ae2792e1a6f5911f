//! End-to-end tests of the egg record pipeline.

use std::fs;

use henhouse::eggs::{self, load_records, source_for_path, FilterSpec, Params, RawRow, PAGE_SIZE};
use henhouse::error::SourceError;
use henhouse::EggListView;

// ============================================================================
// Helpers
// ============================================================================

fn header() -> RawRow {
    [
        "Date", "House", "Total Eggs", "Mortality", "Broken", "Chickens", "Food", "Recorded By",
        "Trays", "Percentage",
    ]
    .iter()
    .map(|c| Some(c.to_string()))
    .collect()
}

fn sheet(houses: &[&str]) -> Vec<RawRow> {
    let mut rows = vec![header()];
    rows.extend(houses.iter().enumerate().map(|(i, house)| {
        vec![
            Some(format!("2024-02-{:02}", i + 1)),
            Some(house.to_string()),
            Some(format!("{}", 300 + i)),
        ]
    }));
    rows
}

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn seqs(view: &EggListView) -> Vec<usize> {
    view.records.iter().map(|r| r.sequence_number).collect()
}

// ============================================================================
// Documented examples
// ============================================================================

#[test]
fn filter_house_example() {
    let view = eggs::list(&sheet(&["A", "B", "A"]), &params(&[("filterHouse", "A")])).unwrap();
    assert_eq!(seqs(&view), vec![1, 3]);
    assert_eq!(view.distinct_houses, vec!["A"]);
}

#[test]
fn non_numeric_page_example() {
    let view = eggs::list(&sheet(&["A"; 3]), &params(&[("page", "abc")])).unwrap();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.filters.page, 1);
}

#[test]
fn twenty_records_page_three_example() {
    let view = eggs::list(&sheet(&["A"; 20]), &params(&[("page", "3")])).unwrap();
    assert_eq!(seqs(&view), vec![17, 18, 19, 20]);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.total_items, 20);
    assert_eq!((view.showing_from, view.showing_to), (17, 20));
}

#[test]
fn page_beyond_range_is_empty_but_counted() {
    let view = eggs::list(&sheet(&["A"; 10]), &params(&[("page", "9")])).unwrap();
    assert!(view.records.is_empty());
    assert_eq!(view.total_items, 10);
    assert_eq!(view.total_pages, 2);
    assert_eq!((view.showing_from, view.showing_to), (0, 0));
}

#[test]
fn empty_filter_is_identity_and_pages_concatenate() {
    let rows = sheet(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"]);
    let all = load_records(&rows).unwrap();

    let first = eggs::list(&rows, &Params::new()).unwrap();
    let mut collected = Vec::new();
    for page in 1..=first.total_pages {
        let page = page.to_string();
        let view = eggs::list(&rows, &params(&[("page", page.as_str())])).unwrap();
        assert!(view.records.len() <= PAGE_SIZE);
        collected.extend(view.records);
    }
    assert_eq!(collected, all);
}

#[test]
fn search_and_range_combined() {
    let mut rows = vec![header()];
    for (date, house) in [
        ("2024-01-01", "North Barn"),
        ("2024-01-05", "north annex"),
        ("1/6/2024", "North Barn"),
        ("2024-01-09", "South Barn"),
        ("pending", "North Barn"),
    ] {
        rows.push(vec![Some(date.into()), Some(house.into()), Some("10".into())]);
    }

    let view = eggs::list(
        &rows,
        &params(&[
            ("searchHouse", "NORTH"),
            ("filterDateStart", "2024-01-02"),
            ("filterDateEnd", "2024-01-08"),
        ]),
    )
    .unwrap();

    assert_eq!(seqs(&view), vec![2, 3]);
    assert_eq!(view.distinct_houses, vec!["north annex", "North Barn"]);
    assert_eq!(view.filters.search_house, "north");
}

// ============================================================================
// Sources
// ============================================================================

#[test]
fn csv_export_with_ragged_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eggs.csv");
    fs::write(
        &path,
        "Date,House,Total Eggs,Mortality,Broken,Chickens,Food,Recorded By,Trays,Percentage\n\
         2024-03-01,North,410,2,5,1200,130.5,Ana,13,91.2\n\
         2024-03-02,South,,x\n",
    )
    .unwrap();

    let records = load_records(source_for_path(&path).as_ref()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].recorded_by, "Ana");
    assert_eq!(records[0].percentage, 91.2);
    assert_eq!(records[1].total_eggs, 0.0);
    assert_eq!(records[1].mortality, 0.0);
    assert_eq!(records[1].sequence_number, 2);
}

#[test]
fn sheet_values_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("eggs.json");
    fs::write(
        &path,
        r#"{"range": "Eggs!A1:J3", "majorDimension": "ROWS", "values": [
            ["Date", "House", "Total Eggs"],
            ["2024-03-01", "North", 410],
            ["2024-03-02", "South", "12 trays"]
        ]}"#,
    )
    .unwrap();

    let records = load_records(source_for_path(&path).as_ref()).unwrap();
    assert_eq!(records[0].total_eggs, 410.0);
    assert_eq!(records[1].total_eggs, 12.0);
}

#[test]
fn missing_and_empty_sources_are_unavailable() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("nope.csv");
    assert!(matches!(
        load_records(source_for_path(&missing).as_ref()),
        Err(SourceError::Read { .. })
    ));

    let empty = dir.path().join("empty.csv");
    fs::write(&empty, "").unwrap();
    assert!(matches!(
        load_records(source_for_path(&empty).as_ref()),
        Err(SourceError::NoData)
    ));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{").unwrap();
    assert!(matches!(
        load_records(source_for_path(&broken).as_ref()),
        Err(SourceError::Json { .. })
    ));
}

#[test]
fn header_only_sheet_is_empty_view() {
    let view = eggs::list(&vec![header()], &Params::new()).unwrap();
    assert!(view.records.is_empty());
    assert_eq!(view.total_pages, 0);
    assert!(view.distinct_houses.is_empty());
    assert_eq!(view.filters, FilterSpec::default());
}
