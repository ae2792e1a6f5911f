//! Applies a [`FilterSpec`] to the record set.
//!
//! The filter compiles to a `henhouse_seeker` query: house search, exact
//! date, exact house and the inclusive date range all go to the AND group.
//! With [`MatchMode::Any`] the two search criteria move to the OR group.

use henhouse_seeker::{parse_date, OrderBy, Query, Seekable};
use tracing::debug;

use crate::eggs::params::{FilterSpec, MatchMode};
use crate::eggs::record::EggRecord;

/// Builds the matching query for `spec`. Ordering is not included.
pub fn build_query(spec: &FilterSpec) -> Query {
    let mut query = Query::new();
    let search_to_or = spec.match_mode == MatchMode::Any;

    if !spec.search_house.is_empty() {
        query = if search_to_or {
            query.or_contains_fold(EggRecord::HOUSE, &spec.search_house)
        } else {
            query.and_contains_fold(EggRecord::HOUSE, &spec.search_house)
        };
    }
    if !spec.search_date.is_empty() {
        query = if search_to_or {
            query.or_eq(EggRecord::DATE, spec.search_date.as_str())
        } else {
            query.and_eq(EggRecord::DATE, spec.search_date.as_str())
        };
    }
    if !spec.filter_house.is_empty() {
        query = query.and_eq(EggRecord::HOUSE, spec.filter_house.as_str());
    }
    // An unparseable bound compiles to a clause nothing satisfies
    if !spec.filter_date_start.is_empty() {
        query = query.and_gte(EggRecord::CALENDAR_DATE, parse_date(&spec.filter_date_start));
    }
    if !spec.filter_date_end.is_empty() {
        query = query.and_lte(EggRecord::CALENDAR_DATE, parse_date(&spec.filter_date_end));
    }

    query
}

/// Returns the records matching `spec`, in input order.
pub fn filter_records(records: &[EggRecord], spec: &FilterSpec) -> Vec<EggRecord> {
    if spec.is_unfiltered() {
        return records.to_vec();
    }
    let filtered = build_query(spec).filter_cloned(records, EggRecord::accessor);
    debug!(
        input = records.len(),
        matched = filtered.len(),
        date_range = spec.has_date_range(),
        "filtered egg records"
    );
    filtered
}

/// Resolves a sort parameter to an ordering, or `None` for unknown fields.
///
/// `date` orders chronologically; records with unparseable dates go last.
pub fn sort_order(sort: &str) -> Option<OrderBy> {
    let order = OrderBy::parse(sort.trim()).ok()?;
    let field = match order.field.as_str() {
        EggRecord::DATE | EggRecord::CALENDAR_DATE => EggRecord::CALENDAR_DATE,
        EggRecord::SEQUENCE_NUMBER => EggRecord::SEQUENCE_NUMBER,
        EggRecord::HOUSE => EggRecord::HOUSE,
        EggRecord::TOTAL_EGGS => EggRecord::TOTAL_EGGS,
        EggRecord::MORTALITY => EggRecord::MORTALITY,
        EggRecord::BROKEN_EGGS => EggRecord::BROKEN_EGGS,
        EggRecord::CHICKEN_COUNT => EggRecord::CHICKEN_COUNT,
        EggRecord::FOOD_AMOUNT => EggRecord::FOOD_AMOUNT,
        EggRecord::RECORDED_BY => EggRecord::RECORDED_BY,
        EggRecord::TRAY_COUNT => EggRecord::TRAY_COUNT,
        EggRecord::PERCENTAGE => EggRecord::PERCENTAGE,
        _ => return None,
    };
    Some(OrderBy::new(field, order.dir))
}

/// Stably sorts `records` by the `sort` parameter. Unknown fields leave
/// the order untouched.
pub fn sort_records(records: Vec<EggRecord>, sort: &str) -> Vec<EggRecord> {
    if sort.trim().is_empty() {
        return records;
    }
    let Some(order) = sort_order(sort) else {
        debug!(sort, "ignoring unknown sort field");
        return records;
    };
    Query::new()
        .order_by(order)
        .filter_cloned(&records, EggRecord::accessor)
}
