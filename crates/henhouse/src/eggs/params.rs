//! Request parameters and their normalized form.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

pub const SEARCH_HOUSE: &str = "searchHouse";
pub const SEARCH_DATE: &str = "searchDate";
pub const FILTER_HOUSE: &str = "filterHouse";
pub const FILTER_DATE_START: &str = "filterDateStart";
pub const FILTER_DATE_END: &str = "filterDateEnd";
pub const PAGE: &str = "page";
pub const SORT: &str = "sort";
pub const MATCH_MODE: &str = "matchMode";

/// Raw request parameters keyed by name. Every key is optional.
pub type Params = BTreeMap<String, String>;

/// How the two search criteria combine with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every criterion must hold.
    #[default]
    All,
    /// Either search criterion may hold; filters still all apply.
    Any,
}

impl MatchMode {
    /// `"any"` (any case) selects [`MatchMode::Any`]; everything else is `All`.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("any") {
            MatchMode::Any
        } else {
            MatchMode::All
        }
    }
}

/// Canonical filter derived from request parameters.
///
/// Empty text fields mean "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Lower-cased house substring.
    pub search_house: String,
    pub search_date: String,
    pub filter_house: String,
    pub filter_date_start: String,
    pub filter_date_end: String,
    /// 1-based page number, never 0.
    pub page: usize,
    /// Field name to order by, `-` prefix for descending.
    pub sort: String,
    pub match_mode: MatchMode,
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec {
            search_house: String::new(),
            search_date: String::new(),
            filter_house: String::new(),
            filter_date_start: String::new(),
            filter_date_end: String::new(),
            page: 1,
            sort: String::new(),
            match_mode: MatchMode::All,
        }
    }
}

impl FilterSpec {
    /// Normalizes raw parameters. Never fails: malformed values fall back
    /// to their defaults.
    pub fn from_params(params: &Params) -> Self {
        let text = |key: &str| params.get(key).cloned().unwrap_or_default();

        FilterSpec {
            search_house: text(SEARCH_HOUSE).to_lowercase(),
            search_date: text(SEARCH_DATE),
            filter_house: text(FILTER_HOUSE),
            filter_date_start: text(FILTER_DATE_START),
            filter_date_end: text(FILTER_DATE_END),
            page: parse_page(params.get(PAGE).map(String::as_str)),
            sort: text(SORT),
            match_mode: MatchMode::parse(&text(MATCH_MODE)),
        }
    }

    /// True when no criterion constrains the record set.
    pub fn is_unfiltered(&self) -> bool {
        self.search_house.is_empty()
            && self.search_date.is_empty()
            && self.filter_house.is_empty()
            && self.filter_date_start.is_empty()
            && self.filter_date_end.is_empty()
    }

    /// True when a date range bound is present.
    pub fn has_date_range(&self) -> bool {
        !self.filter_date_start.is_empty() || !self.filter_date_end.is_empty()
    }
}

/// Reads a page number with leading-integer semantics.
///
/// Leading whitespace and a sign are allowed and trailing garbage is
/// ignored (`"3rd"` is 3). Missing, unparseable, zero or negative values
/// are page 1. Overlong numbers saturate.
pub fn parse_page(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return 1;
    };

    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: &str = &digits[..digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len())];

    let value = digits.bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    });

    if digits.is_empty() || negative || value == 0 {
        debug!(page = raw, "page parameter coerced to 1");
        1
    } else {
        value
    }
}
