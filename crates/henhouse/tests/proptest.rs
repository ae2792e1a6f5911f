//! Property-based tests for the egg record pipeline.

use henhouse::eggs::{
    distinct_houses, filter_records, paginate, parse_number, EggListView, EggRecord, FilterSpec,
    MatchMode, RawRow, PAGE_SIZE,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[0-9]{1,4}(\\.[0-9]{1,2})?".prop_map(Some),
        "[ a-zA-Z0-9.eE+-]{0,8}".prop_map(Some),
        any::<f64>().prop_map(|n| Some(n.to_string())),
    ]
}

fn records() -> impl Strategy<Value = Vec<EggRecord>> {
    let row = (
        prop_oneof![
            (1u32..=12, 1u32..=28).prop_map(|(m, d)| format!("2024-{:02}-{:02}", m, d)),
            Just("unknown".to_string()),
        ],
        prop::sample::select(vec!["North", "South", "Annex", "north annex"]),
        prop::collection::vec(cell(), 0..9),
    )
        .prop_map(|(date, house, numbers)| {
            let mut row: RawRow = vec![Some(date), Some(house.to_string())];
            row.extend(numbers);
            row
        });
    prop::collection::vec(row, 0..40).prop_map(|rows| EggRecord::from_rows(&rows))
}

fn spec() -> impl Strategy<Value = FilterSpec> {
    (
        prop::sample::select(vec!["", "north", "ann", "x"]),
        prop::sample::select(vec!["", "North", "Annex"]),
        prop::sample::select(vec!["", "2024-03-01", "bogus"]),
        prop::sample::select(vec!["", "2024-09-30"]),
        any::<bool>(),
    )
        .prop_map(|(search, house, start, end, any_mode)| FilterSpec {
            search_house: search.to_string(),
            filter_house: house.to_string(),
            filter_date_start: start.to_string(),
            filter_date_end: end.to_string(),
            match_mode: if any_mode { MatchMode::Any } else { MatchMode::All },
            ..FilterSpec::default()
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Numeric fields are never NaN, whatever the cells contain.
    #[test]
    fn numeric_fields_are_finite(records in records()) {
        for r in &records {
            for n in [
                r.total_eggs, r.mortality, r.broken_eggs, r.chicken_count,
                r.food_amount, r.tray_count, r.percentage,
            ] {
                prop_assert!(n.is_finite());
            }
        }
    }

    /// Cell parsing never yields NaN or infinity.
    #[test]
    fn parse_number_is_finite(text in ".{0,12}") {
        prop_assert!(parse_number(Some(&text)).is_finite());
    }

    /// Filtering twice changes nothing.
    #[test]
    fn filtering_is_idempotent(records in records(), spec in spec()) {
        let once = filter_records(&records, &spec);
        let twice = filter_records(&once, &spec);
        prop_assert_eq!(once, twice);
    }

    /// The empty filter keeps everything in order.
    #[test]
    fn empty_filter_is_identity(records in records()) {
        prop_assert_eq!(filter_records(&records, &FilterSpec::default()), records);
    }

    /// Filtered output is an ordered subsequence of the input.
    #[test]
    fn filtering_preserves_order(records in records(), spec in spec()) {
        let filtered = filter_records(&records, &spec);
        let seqs: Vec<usize> = filtered.iter().map(|r| r.sequence_number).collect();
        prop_assert!(seqs.windows(2).all(|w| w[0] < w[1]));
    }

    /// Page counts and concatenation reproduce the filtered set.
    #[test]
    fn pages_cover_the_set(records in records(), spec in spec()) {
        let filtered = filter_records(&records, &spec);
        let first = paginate(&filtered, 1);
        prop_assert_eq!(first.total_pages, filtered.len().div_ceil(PAGE_SIZE));

        let mut collected = Vec::new();
        for page in 1..=first.total_pages {
            collected.extend(paginate(&filtered, page).items);
        }
        prop_assert_eq!(collected, filtered);
    }

    /// Facets are exactly the distinct houses of the filtered set.
    #[test]
    fn facets_match_filtered_houses(records in records(), spec in spec()) {
        let view = EggListView::build(&records, &spec);
        let filtered = filter_records(&records, &spec);
        prop_assert_eq!(&view.distinct_houses, &distinct_houses(&filtered));
        for house in &view.distinct_houses {
            prop_assert!(filtered.iter().any(|r| &r.house == house));
        }
    }
}
