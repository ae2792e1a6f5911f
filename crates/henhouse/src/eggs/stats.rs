//! Dashboard aggregates over a record set.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use henhouse_seeker::parse_date;
use serde::Serialize;

use crate::eggs::record::EggRecord;

/// Estimated sale price of one egg.
pub const PRICE_PER_EGG: f64 = 0.10;

/// Eggs the farm aims to produce each month.
pub const MONTHLY_TARGET: f64 = 10_000.0;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    pub month: &'static str,
    pub eggs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthProgress {
    pub month: &'static str,
    pub produced: f64,
    pub target: f64,
    /// Share of the target reached, in percent. May exceed 100.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub record_count: usize,
    pub total_eggs: f64,
    pub total_mortality: f64,
    pub total_broken_eggs: f64,
    pub distinct_recorders: usize,
    pub estimated_sales: f64,
    /// January through December; records from every year share a bucket.
    pub monthly: Vec<MonthlyTotal>,
    pub current_month: MonthProgress,
    pub today: String,
    pub today_eggs: f64,
}

impl DashboardStats {
    /// Aggregates `records`; `today` decides the current month and day.
    ///
    /// Records whose date does not parse count toward the totals but not
    /// toward any month or day.
    pub fn compute(records: &[EggRecord], today: NaiveDate) -> Self {
        let mut monthly = [0.0_f64; 12];
        let mut today_eggs = 0.0;
        let mut recorders = HashSet::new();
        let (mut total_eggs, mut total_mortality, mut total_broken_eggs) = (0.0, 0.0, 0.0);

        for record in records {
            total_eggs += record.total_eggs;
            total_mortality += record.mortality;
            total_broken_eggs += record.broken_eggs;

            if !record.recorded_by.is_empty() {
                recorders.insert(record.recorded_by.as_str());
            }

            if let Some(day) = parse_date(&record.date) {
                monthly[day.month0() as usize] += record.total_eggs;
                if day == today {
                    today_eggs += record.total_eggs;
                }
            }
        }

        let month_index = today.month0() as usize;
        let produced = monthly[month_index];

        DashboardStats {
            record_count: records.len(),
            total_eggs,
            total_mortality,
            total_broken_eggs,
            distinct_recorders: recorders.len(),
            estimated_sales: total_eggs * PRICE_PER_EGG,
            monthly: MONTH_NAMES
                .iter()
                .zip(monthly)
                .map(|(&month, eggs)| MonthlyTotal { month, eggs })
                .collect(),
            current_month: MonthProgress {
                month: MONTH_NAMES[month_index],
                produced,
                target: MONTHLY_TARGET,
                percent: produced / MONTHLY_TARGET * 100.0,
            },
            today: today.format("%Y-%m-%d").to_string(),
            today_eggs,
        }
    }
}
