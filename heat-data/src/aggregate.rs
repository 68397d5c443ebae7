//! Two-level (year → month) group-by-reduce over daily records.
//!
//! Keys iterate in the order they were first seen, for both the year level
//! and the month level within a year. Callers that need chronological order
//! sort explicitly.

use crate::extent::{max_of, min_of};
use chrono::Datelike;
use hashlink::LinkedHashMap;
use heat_record::{DailyRecord, MonthKey};
use serde::Serialize;

/// Grouped output of one aggregation pass.
///
/// Records without a valid date cannot be placed on the calendar and are
/// reduced into the separate `undated` bucket instead.
#[derive(Debug, Clone)]
pub struct MonthlyAggregation<T> {
    pub years: LinkedHashMap<i32, LinkedHashMap<u32, T>>,
    pub undated: Option<T>,
}

impl<T> MonthlyAggregation<T> {
    /// True when there are no dated buckets and no undated bucket.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty() && self.undated.is_none()
    }

    /// Number of dated (year, month) buckets.
    pub fn bucket_count(&self) -> usize {
        self.years.values().map(|months| months.len()).sum()
    }

    pub fn get(&self, key: MonthKey) -> Option<&T> {
        self.years.get(&key.year).and_then(|months| months.get(&key.month))
    }

    /// Dated buckets in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (MonthKey, &T)> + '_ {
        self.years.iter().flat_map(|(year, months)| {
            months
                .iter()
                .map(move |(month, value)| (MonthKey::new(*year, *month), value))
        })
    }
}

/// Reduction of one bucket: highest daily maximum and lowest daily minimum.
///
/// A field is `None` when no member of the bucket has a numeric value for it.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct MonthSummary {
    pub max: Option<f64>,
    pub min: Option<f64>,
}

impl MonthSummary {
    pub fn of(days: &[DailyRecord]) -> Self {
        MonthSummary {
            max: max_of(days.iter().map(|d| d.max_temperature)),
            min: min_of(days.iter().map(|d| d.min_temperature)),
        }
    }
}

/// Group records by calendar year then month and reduce every bucket.
///
/// Each record lands in exactly one bucket, chosen only by its date's year
/// and month. Members reach `reduce` in input order.
pub fn group_by_month<T, F>(records: &[DailyRecord], mut reduce: F) -> MonthlyAggregation<T>
where
    F: FnMut(Vec<DailyRecord>) -> T,
{
    let mut groups: LinkedHashMap<i32, LinkedHashMap<u32, Vec<DailyRecord>>> =
        LinkedHashMap::new();
    let mut undated = Vec::new();

    for record in records {
        match record.date {
            Some(date) => groups
                .entry(date.year())
                .or_insert_with(LinkedHashMap::new)
                .entry(date.month())
                .or_insert_with(Vec::new)
                .push(*record),
            None => undated.push(*record),
        }
    }

    let years = groups
        .into_iter()
        .map(|(year, months)| {
            let reduced = months
                .into_iter()
                .map(|(month, days)| (month, reduce(days)))
                .collect::<LinkedHashMap<_, _>>();
            (year, reduced)
        })
        .collect::<LinkedHashMap<_, _>>();
    let undated = if undated.is_empty() {
        None
    } else {
        Some(reduce(undated))
    };

    MonthlyAggregation { years, undated }
}

/// Summary reduction: max/min per (year, month).
pub fn summarize(records: &[DailyRecord]) -> MonthlyAggregation<MonthSummary> {
    let aggregation = group_by_month(records, |days| MonthSummary::of(&days));
    log::debug!(
        "aggregate: {} records into {} summary buckets",
        records.len(),
        aggregation.bucket_count()
    );
    aggregation
}

/// Detail grouping: the bucket's own records, sorted ascending by date.
///
/// The sort is stable, so duplicate dates keep their input order.
pub fn group_sorted(records: &[DailyRecord]) -> MonthlyAggregation<Vec<DailyRecord>> {
    let aggregation = group_by_month(records, |mut days| {
        days.sort_by_key(|d| d.date);
        days
    });
    log::debug!(
        "aggregate: {} records into {} detail buckets",
        records.len(),
        aggregation.bucket_count()
    );
    aggregation
}
