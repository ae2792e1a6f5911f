//! Typed egg records built from raw spreadsheet rows.

use henhouse_seeker::{Seekable, Value};
use serde::{Deserialize, Serialize};

/// One raw spreadsheet row. `None` is an empty or null cell.
pub type RawRow = Vec<Option<String>>;

/// One day's production entry for one house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EggRecord {
    /// 1-based position in the source rows, header excluded.
    pub sequence_number: usize,
    pub date: String,
    pub house: String,
    pub total_eggs: f64,
    pub mortality: f64,
    pub broken_eggs: f64,
    pub chicken_count: f64,
    pub food_amount: f64,
    pub recorded_by: String,
    pub tray_count: f64,
    pub percentage: f64,
}

// Column positions in the export
const COL_DATE: usize = 0;
const COL_HOUSE: usize = 1;
const COL_TOTAL_EGGS: usize = 2;
const COL_MORTALITY: usize = 3;
const COL_BROKEN_EGGS: usize = 4;
const COL_CHICKEN_COUNT: usize = 5;
const COL_FOOD_AMOUNT: usize = 6;
const COL_RECORDED_BY: usize = 7;
const COL_TRAY_COUNT: usize = 8;
const COL_PERCENTAGE: usize = 9;

impl EggRecord {
    pub const SEQUENCE_NUMBER: &'static str = "sequenceNumber";
    pub const DATE: &'static str = "date";
    pub const HOUSE: &'static str = "house";
    pub const TOTAL_EGGS: &'static str = "totalEggs";
    pub const MORTALITY: &'static str = "mortality";
    pub const BROKEN_EGGS: &'static str = "brokenEggs";
    pub const CHICKEN_COUNT: &'static str = "chickenCount";
    pub const FOOD_AMOUNT: &'static str = "foodAmount";
    pub const RECORDED_BY: &'static str = "recordedBy";
    pub const TRAY_COUNT: &'static str = "trayCount";
    pub const PERCENTAGE: &'static str = "percentage";
    /// The `date` cell parsed as a calendar date; `None` when unparseable.
    pub const CALENDAR_DATE: &'static str = "calendarDate";

    /// Builds a record from one row. Extra cells are ignored.
    pub fn from_row(sequence_number: usize, row: &[Option<String>]) -> Self {
        let text = |i: usize| {
            row.get(i)
                .and_then(|c| c.as_deref())
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };
        let number = |i: usize| parse_number(row.get(i).and_then(|c| c.as_deref()));

        EggRecord {
            sequence_number,
            date: text(COL_DATE),
            house: text(COL_HOUSE),
            total_eggs: number(COL_TOTAL_EGGS),
            mortality: number(COL_MORTALITY),
            broken_eggs: number(COL_BROKEN_EGGS),
            chicken_count: number(COL_CHICKEN_COUNT),
            food_amount: number(COL_FOOD_AMOUNT),
            recorded_by: text(COL_RECORDED_BY),
            tray_count: number(COL_TRAY_COUNT),
            percentage: number(COL_PERCENTAGE),
        }
    }

    /// Builds records from data rows (header already removed), numbered from 1.
    pub fn from_rows(rows: &[RawRow]) -> Vec<EggRecord> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| EggRecord::from_row(index + 1, row))
            .collect()
    }
}

impl Seekable for EggRecord {
    fn field_value(&self, name: &str) -> Value<'_> {
        match name {
            Self::SEQUENCE_NUMBER => Value::from(self.sequence_number),
            Self::DATE => Value::Text(&self.date),
            Self::HOUSE => Value::Text(&self.house),
            Self::TOTAL_EGGS => Value::Number(self.total_eggs),
            Self::MORTALITY => Value::Number(self.mortality),
            Self::BROKEN_EGGS => Value::Number(self.broken_eggs),
            Self::CHICKEN_COUNT => Value::Number(self.chicken_count),
            Self::FOOD_AMOUNT => Value::Number(self.food_amount),
            Self::RECORDED_BY => Value::Text(&self.recorded_by),
            Self::TRAY_COUNT => Value::Number(self.tray_count),
            Self::PERCENTAGE => Value::Number(self.percentage),
            Self::CALENDAR_DATE => Value::date_text(&self.date),
            _ => Value::Missing,
        }
    }
}

/// Parses a numeric cell, reading the longest leading decimal number.
///
/// `"12kg"` is 12, `" -3.5e2x"` is -350. Empty, missing, non-numeric and
/// non-finite cells are 0, so the result is never NaN.
pub fn parse_number(cell: Option<&str>) -> f64 {
    let Some(text) = cell else {
        return 0.0;
    };
    let text = text.trim();
    let prefix = &text[..numeric_prefix_len(text)];
    match prefix.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    end = digits_from(end);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    end
}
