//! Cross-module behaviour through the public API.

use std::cmp::Ordering;

use chrono::NaiveDate;
use henhouse_seeker::{
    parse_date, Clause, Dir, Kind, Op, Operand, OrderBy, Query, SeekerError, Seekable, Value,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn number<'a>(n: &'a f64, _field: &str) -> Value<'a> {
    Value::Number(*n)
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    date: String,
    house: String,
}

impl Seekable for Entry {
    fn field_value(&self, name: &str) -> Value<'_> {
        match name {
            "date" => Value::Text(&self.date),
            "day" => Value::date_text(&self.date),
            "house" => Value::Text(&self.house),
            _ => Value::Missing,
        }
    }
}

fn entry(date: &str, house: &str) -> Entry {
    Entry {
        date: date.to_string(),
        house: house.to_string(),
    }
}

// ============================================================================
// Dates
// ============================================================================

#[test]
fn parse_date_formats() {
    assert_eq!(parse_date("2024-05-06"), Some(ymd(2024, 5, 6)));
    assert_eq!(parse_date("5/6/2024"), Some(ymd(2024, 5, 6)));
    assert_eq!(parse_date("2024/05/06"), Some(ymd(2024, 5, 6)));
    assert_eq!(parse_date("2024-05-06T23:10:00Z"), Some(ymd(2024, 5, 6)));
    assert_eq!(parse_date("06.05.2024"), None);
}

#[test]
fn mixed_date_formats_compare_as_days() {
    let entries = vec![
        entry("2024-03-01", "A"),
        entry("3/2/2024", "B"),
        entry("2024-03-03T06:00:00Z", "C"),
        entry("pending", "D"),
    ];
    let hits = Query::new()
        .and_gte("day", ymd(2024, 3, 2))
        .filter(&entries, Entry::accessor);
    let houses: Vec<&str> = hits.iter().map(|e| e.house.as_str()).collect();
    assert_eq!(houses, vec!["B", "C"]);
}

// ============================================================================
// Clauses
// ============================================================================

#[test]
fn text_date_field_is_not_a_date() {
    // The raw text field never matches a date operand
    let clause = Clause::new("date", Op::Eq, ymd(2024, 3, 1));
    let e = entry("2024-03-01", "A");
    assert!(!clause.test(&e.field_value("date")));
    assert!(clause.test(&e.field_value("day")));
}

#[test]
fn checked_reports_kind() {
    let err = Clause::checked("house", Op::Before, "North").unwrap_err();
    assert_eq!(
        err,
        SeekerError::Mismatch {
            op: Op::Before,
            kind: Kind::Text,
        }
    );
    assert_eq!(err.to_string(), "operator 'before' cannot compare text values");
}

#[test]
fn operators_parse_from_symbols() {
    let op: Op = "~*".parse().unwrap();
    let clause = Clause::new("house", op, "BARN");
    assert_eq!(clause.operand, Operand::Text("BARN".to_string()));
    assert!(clause.test(&Value::Text("north barn")));
    assert!("=~".parse::<Op>().is_err());
}

#[test]
fn unknown_field_matches_nothing() {
    let entries = vec![entry("2024-03-01", "A")];
    let query = Query::new().and_ne("colour", "red");
    assert_eq!(query.count(&entries, Entry::accessor), 0);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn order_by_parse_and_display() {
    assert_eq!(OrderBy::parse("day").unwrap(), OrderBy::new("day", Dir::Asc));
    assert_eq!(OrderBy::parse("-day").unwrap().dir, Dir::Desc);
    assert_eq!(OrderBy::desc("day").to_string(), "-day");
    assert!(OrderBy::parse("").is_err());
}

#[test]
fn descending_numbers() {
    let items = vec![3.0, 9.0, 1.0, 5.0];
    let sorted = Query::new()
        .order_by(OrderBy::desc("n"))
        .filter_cloned(&items, number);
    assert_eq!(sorted, vec![9.0, 5.0, 3.0, 1.0]);
}

#[test]
fn sort_by_text_then_day() {
    let entries = vec![
        entry("2024-03-02", "B"),
        entry("2024-03-01", "B"),
        entry("2024-03-05", "A"),
    ];
    let hits = Query::new()
        .order_by(OrderBy::asc("house"))
        .order_by(OrderBy::asc("day"))
        .filter(&entries, Entry::accessor);
    let dates: Vec<&str> = hits.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-03-05", "2024-03-01", "2024-03-02"]);
}

#[test]
fn missing_value_ordering() {
    let key = OrderBy::desc("day");
    assert_eq!(
        key.compare(&Value::Missing, &Value::Date(ymd(2024, 1, 1))),
        Ordering::Greater
    );
}
