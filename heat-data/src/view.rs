//! Flat, render-ready records built from the nested aggregations.
//!
//! All structs derive `Serialize` so they can be handed to a chart layer
//! as JSON.

use crate::{
    aggregate::{MonthSummary, MonthlyAggregation},
    extent::{max_of, min_of},
};
use heat_record::{DailyRecord, Mode, MonthKey};
use serde::Serialize;
use std::collections::BTreeSet;

/// One summary heatmap cell.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FlatSummaryRecord {
    pub year: i32,
    /// 1-indexed calendar month.
    pub month: u32,
    pub max: Option<f64>,
    pub min: Option<f64>,
}

/// One detail heatmap cell with the days behind its mini line charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlatDetailRecord {
    pub year: i32,
    /// 1-indexed calendar month.
    pub month: u32,
    /// Days of the month, ascending by date.
    pub days: Vec<DailyRecord>,
}

impl FlatDetailRecord {
    /// Value that colors the cell background: the highest daily maximum
    /// for [`Mode::Max`], the lowest daily minimum for [`Mode::Min`].
    pub fn cell_value(&self, mode: Mode) -> Option<f64> {
        match mode {
            Mode::Max => max_of(self.days.iter().map(|d| d.max_temperature)),
            Mode::Min => min_of(self.days.iter().map(|d| d.min_temperature)),
        }
    }

    /// Day under a pointer at `fraction` of the cell width.
    ///
    /// Maps `[0, 1)` onto the day sequence; anything outside, or a cell with no
    /// days, gives `None`.
    pub fn day_at(&self, fraction: f64) -> Option<&DailyRecord> {
        if !(0.0..1.0).contains(&fraction) {
            return None;
        }
        let index = (fraction * self.days.len() as f64).floor() as usize;
        self.days.get(index)
    }
}

/// Anything positioned on the (year, month) grid.
pub trait MonthCell {
    fn key(&self) -> MonthKey;
}

impl MonthCell for FlatSummaryRecord {
    fn key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }
}

impl MonthCell for FlatDetailRecord {
    fn key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }
}

/// Flatten an aggregation into one record per dated (year, month) bucket, in
/// the aggregation's iteration order.
///
/// The undated bucket has no place on the grid and is left out.
pub fn flatten<T, R, F>(aggregation: MonthlyAggregation<T>, mut build: F) -> Vec<R>
where
    F: FnMut(MonthKey, T) -> R,
{
    if aggregation.undated.is_some() {
        log::warn!("view: undated records left out of the heatmap grid");
    }
    aggregation
        .years
        .into_iter()
        .flat_map(|(year, months)| {
            months
                .into_iter()
                .map(move |(month, value)| (MonthKey::new(year, month), value))
        })
        .map(|(key, value)| build(key, value))
        .collect()
}

pub fn flatten_summary(aggregation: MonthlyAggregation<MonthSummary>) -> Vec<FlatSummaryRecord> {
    flatten(aggregation, |key, summary| FlatSummaryRecord {
        year: key.year,
        month: key.month,
        max: summary.max,
        min: summary.min,
    })
}

pub fn flatten_detail(aggregation: MonthlyAggregation<Vec<DailyRecord>>) -> Vec<FlatDetailRecord> {
    flatten(aggregation, |key, days| FlatDetailRecord {
        year: key.year,
        month: key.month,
        days,
    })
}

/// Distinct years, ascending: the column domain of a heatmap.
pub fn year_domain<C: MonthCell>(cells: &[C]) -> Vec<i32> {
    cells
        .iter()
        .map(|c| c.key().year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct months, ascending: the row domain of a heatmap.
pub fn month_domain<C: MonthCell>(cells: &[C]) -> Vec<u32> {
    cells
        .iter()
        .map(|c| c.key().month)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
