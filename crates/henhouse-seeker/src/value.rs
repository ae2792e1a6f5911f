//! Field values read out of records.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate};

/// What a present [`Value`] holds. Operators are checked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Text,
    Number,
    Date,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Text => "text",
            Kind::Number => "number",
            Kind::Date => "date",
        })
    }
}

/// A field of a record as clauses and sort keys see it. Text is borrowed
/// from the record.
///
/// ```
/// use henhouse_seeker::Value;
///
/// struct Tally {
///     house: String,
///     eggs: f64,
///     day: String,
/// }
///
/// fn accessor<'a>(tally: &'a Tally, field: &str) -> Value<'a> {
///     match field {
///         "house" => Value::Text(&tally.house),
///         "eggs" => Value::Number(tally.eggs),
///         "day" => Value::date_text(&tally.day),
///         _ => Value::Missing,
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
    /// Absent, unparseable or unknown. No clause matches it and it sorts
    /// after every present value.
    Missing,
}

impl<'a> Value<'a> {
    /// Reads `text` as a calendar date; [`Value::Missing`] when it is not one.
    pub fn date_text(text: &str) -> Value<'static> {
        parse_date(text).map_or(Value::Missing, Value::Date)
    }

    pub fn kind(&self) -> Option<Kind> {
        match self {
            Value::Text(_) => Some(Kind::Text),
            Value::Number(_) => Some(Kind::Number),
            Value::Date(_) => Some(Kind::Date),
            Value::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Orders two values of one kind. Mixed kinds, missing values and NaN
    /// give `None`.
    pub fn compare(&self, other: &Value<'_>) -> Option<Ordering> {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => Some((*a).cmp(*b)),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Self {
        Value::Text(text)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(text: &'a String) -> Self {
        Value::Text(text)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<usize> for Value<'_> {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<NaiveDate> for Value<'_> {
    fn from(day: NaiveDate) -> Self {
        Value::Date(day)
    }
}

impl From<Option<NaiveDate>> for Value<'_> {
    fn from(day: Option<NaiveDate>) -> Self {
        day.map_or(Value::Missing, Value::Date)
    }
}

/// Month-first: `03/04/2024` is March 4.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses the calendar dates sheets and date pickers produce.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `M/D/YYYY` and RFC 3339 timestamps,
/// whose date is taken at their own offset. Surrounding whitespace is
/// ignored.
///
/// ```
/// use chrono::NaiveDate;
/// use henhouse_seeker::parse_date;
///
/// let march_4 = NaiveDate::from_ymd_opt(2024, 3, 4);
/// assert_eq!(parse_date("2024-03-04"), march_4);
/// assert_eq!(parse_date("3/4/2024"), march_4);
/// assert_eq!(parse_date("2024-03-04T08:30:00Z"), march_4);
/// assert_eq!(parse_date("yesterday"), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(day) = NaiveDate::parse_from_str(text, format) {
            return Some(day);
        }
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|stamp| stamp.date_naive())
}
