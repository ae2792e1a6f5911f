//! The outbound record list and the pipeline that produces it.

use serde::Serialize;

use crate::eggs::facets::distinct_houses;
use crate::eggs::filter::{filter_records, sort_records};
use crate::eggs::page::paginate;
use crate::eggs::params::FilterSpec;
use crate::eggs::record::EggRecord;

/// One page of filtered records with counts and facets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EggListView {
    pub records: Vec<EggRecord>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub distinct_houses: Vec<String>,
    pub filters: FilterSpec,
    pub showing_from: usize,
    pub showing_to: usize,
}

impl EggListView {
    /// Runs filter, ordering, pagination and facet extraction over `records`.
    ///
    /// Facets come from the filtered set before ordering.
    pub fn build(records: &[EggRecord], spec: &FilterSpec) -> Self {
        let filtered = filter_records(records, spec);
        let distinct_houses = distinct_houses(&filtered);
        let ordered = sort_records(filtered, &spec.sort);
        let page = paginate(&ordered, spec.page);

        EggListView {
            records: page.items,
            total_items: page.total_items,
            total_pages: page.total_pages,
            current_page: page.current_page,
            distinct_houses,
            filters: spec.clone(),
            showing_from: page.showing_from,
            showing_to: page.showing_to,
        }
    }
}
