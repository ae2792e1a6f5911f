//! Egg production records: source rows to a filtered, paginated view.
//!
//! ```text
//! RecordSource -> EggRecord -> FilterSpec -> filter -> sort -> page + facets
//! ```

pub mod facets;
pub mod filter;
pub mod page;
pub mod params;
pub mod record;
pub mod source;
pub mod stats;
pub mod view;

pub use facets::distinct_houses;
pub use filter::{build_query, filter_records, sort_records};
pub use page::{paginate, Page, PAGE_SIZE};
pub use params::{parse_page, FilterSpec, MatchMode, Params};
pub use record::{parse_number, EggRecord, RawRow};
pub use source::{load_records, source_for_path, CsvSheet, RecordSource, SheetValues};
pub use stats::DashboardStats;
pub use view::EggListView;

use crate::error::SourceError;

/// Fetches, normalizes and runs the list pipeline for one request.
pub fn list(source: &dyn RecordSource, params: &Params) -> Result<EggListView, SourceError> {
    let records = load_records(source)?;
    let spec = FilterSpec::from_params(params);
    Ok(EggListView::build(&records, &spec))
}
