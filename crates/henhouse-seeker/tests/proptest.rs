//! Property-based tests for queries.

use chrono::NaiveDate;
use henhouse_seeker::{Op, OrderBy, Query, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

#[derive(Debug, Clone)]
struct Tally {
    id: usize,
    house: String,
    eggs: f64,
    day: Option<NaiveDate>,
}

fn accessor<'a>(tally: &'a Tally, field: &str) -> Value<'a> {
    match field {
        "id" => Value::from(tally.id),
        "house" => Value::Text(&tally.house),
        "eggs" => Value::Number(tally.eggs),
        "day" => Value::from(tally.day),
        _ => Value::Missing,
    }
}

fn day() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::weighted(0.9, 0u64..730).prop_map(|offset| {
        let base = NaiveDate::from_ymd_opt(2023, 1, 1)?;
        base.checked_add_days(chrono::Days::new(offset?))
    })
}

fn tallies() -> impl Strategy<Value = Vec<Tally>> {
    prop::collection::vec(("[A-Za-z ]{0,8}", 0u32..1000, day()), 0..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (house, eggs, day))| Tally {
                id,
                house,
                eggs: f64::from(eggs),
                day,
            })
            .collect()
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Filtering yields an ordered subsequence of the input.
    #[test]
    fn filter_is_ordered_subsequence(tallies in tallies(), threshold in 0u32..1000) {
        let hits = Query::new()
            .and_gte("eggs", f64::from(threshold))
            .filter(&tallies, accessor);

        prop_assert!(hits.len() <= tallies.len());
        prop_assert!(hits.windows(2).all(|w| w[0].id < w[1].id));
    }

    /// Another AND clause can only narrow the result.
    #[test]
    fn and_clause_narrows(
        tallies in tallies(),
        needle in "[a-z]{0,2}",
        threshold in 0u32..1000,
    ) {
        let base = Query::new().and_contains_fold("house", &needle);
        let narrowed = base.clone().and_gte("eggs", f64::from(threshold));
        prop_assert!(narrowed.count(&tallies, accessor) <= base.count(&tallies, accessor));
    }

    /// Another OR clause can only widen a non-empty OR group.
    #[test]
    fn or_clause_widens(tallies in tallies(), a in "[a-z]{1,2}", b in "[a-z]{1,2}") {
        let one = Query::new().or_contains_fold("house", &a);
        let two = one.clone().or_contains_fold("house", &b);
        prop_assert!(two.count(&tallies, accessor) >= one.count(&tallies, accessor));
    }

    /// Case-folded contains ignores the needle's case.
    #[test]
    fn contains_fold_ignores_case(tallies in tallies(), needle in "[a-zA-Z]{0,3}") {
        let lower = Query::new().and_contains_fold("house", &needle.to_lowercase());
        let upper = Query::new().and_contains_fold("house", &needle.to_uppercase());
        prop_assert_eq!(lower.count(&tallies, accessor), upper.count(&tallies, accessor));
    }

    /// An inclusive date range keeps exactly the tallies dated inside it.
    #[test]
    fn date_range_is_inclusive(tallies in tallies(), from in day(), to in day()) {
        let (Some(from), Some(to)) = (from, to) else {
            return Ok(());
        };
        let query = Query::new().and_gte("day", from).and_lte("day", to);

        let expected = tallies
            .iter()
            .filter(|t| matches!(t.day, Some(d) if d >= from && d <= to))
            .count();
        prop_assert_eq!(query.count(&tallies, accessor), expected);
    }

    /// Sorting is a permutation ordered by the key, ties in input order,
    /// undated tallies last.
    #[test]
    fn sorting_is_stable(tallies in tallies(), descending in any::<bool>()) {
        let key = if descending { OrderBy::desc("day") } else { OrderBy::asc("day") };
        let hits = Query::new().order_by(key).filter(&tallies, accessor);

        prop_assert_eq!(hits.len(), tallies.len());
        for pair in hits.windows(2) {
            match (pair[0].day, pair[1].day) {
                (Some(a), Some(b)) if a == b => {
                    prop_assert!(pair[0].id < pair[1].id);
                }
                (Some(a), Some(b)) => {
                    let in_order = if descending { a > b } else { a < b };
                    prop_assert!(in_order, "{} then {} out of order", a, b);
                }
                (None, None) => {
                    prop_assert!(pair[0].id < pair[1].id);
                }
                (Some(_), None) => {}
                (None, Some(_)) => {
                    prop_assert!(false, "undated tally sorted first");
                }
            }
        }
    }

    /// `any` and `find` agree with `count`.
    #[test]
    fn any_find_agree_with_count(tallies in tallies(), threshold in 0u32..1000) {
        let query = Query::new().and("eggs", Op::Lt, f64::from(threshold));
        let count = query.count(&tallies, accessor);
        prop_assert_eq!(query.any(&tallies, accessor), count > 0);
        prop_assert_eq!(query.find(&tallies, accessor).is_some(), count > 0);
    }
}
