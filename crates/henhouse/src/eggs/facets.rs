//! House facets for the filter dropdown.

use std::collections::HashSet;

use crate::eggs::record::EggRecord;

/// Distinct `house` values in first-occurrence order.
pub fn distinct_houses(records: &[EggRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.house.as_str()))
        .map(|r| r.house.clone())
        .collect()
}
