//! Value ranges used to parameterize color and axis scales.
//!
//! Every function here skips missing (`None`) values. The `*_extent` and
//! `*_domain` functions are scale-facing: an empty input gives
//! [`Extent::FALLBACK`] rather than an undefined domain.

use crate::view::FlatSummaryRecord;
use heat_record::{DailyRecord, Mode};
use serde::Serialize;

/// A `[min, max]` pair bounding a numeric collection.
///
/// Serializes as a two-element array so it can be handed to a scale's
/// `domain()` directly.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(into = "[f64; 2]")]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Domain substituted when there is nothing to measure.
    pub const FALLBACK: Extent = Extent { min: 0.0, max: 1.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Extent { min, max }
    }

    pub fn or_fallback(extent: Option<Extent>) -> Extent {
        extent.unwrap_or(Extent::FALLBACK)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl From<Extent> for [f64; 2] {
    fn from(value: Extent) -> Self {
        [value.min, value.max]
    }
}

/// Largest present value.
pub fn max_of<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    values.into_iter().flatten().fold(None, |acc, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}

/// Smallest present value.
pub fn min_of<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    values.into_iter().flatten().fold(None, |acc, v| match acc {
        Some(m) if m <= v => Some(m),
        _ => Some(v),
    })
}

/// `[min, max]` of the present values, or `None` if there are none.
pub fn extent<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<Extent> {
    values.into_iter().flatten().fold(None, |acc, v| match acc {
        None => Some(Extent::new(v, v)),
        Some(e) => Some(Extent::new(e.min.min(v), e.max.max(v))),
    })
}

/// Extent of the reduced monthly statistic selected by `mode`: the `.max`
/// values for [`Mode::Max`], the `.min` values for [`Mode::Min`].
pub fn summary_extent(summary: &[FlatSummaryRecord], mode: Mode) -> Extent {
    let values = summary.iter().map(|r| match mode {
        Mode::Max => r.max,
        Mode::Min => r.min,
    });
    Extent::or_fallback(extent(values))
}

/// Extent of the raw daily temperature selected by `mode` over the
/// windowed records.
pub fn detail_extent(window: &[DailyRecord], mode: Mode) -> Extent {
    let values = window.iter().map(|r| match mode {
        Mode::Max => r.max_temperature,
        Mode::Min => r.min_temperature,
    });
    Extent::or_fallback(extent(values))
}

/// Color domain of the summary grid: lowest monthly minimum to highest
/// monthly maximum. Independent of mode.
pub fn summary_color_domain(summary: &[FlatSummaryRecord]) -> Extent {
    match (
        min_of(summary.iter().map(|r| r.min)),
        max_of(summary.iter().map(|r| r.max)),
    ) {
        (Some(min), Some(max)) => Extent::new(min, max),
        _ => Extent::FALLBACK,
    }
}

/// Shared y-domain of every mini line chart in the detail view: lowest
/// daily minimum to highest daily maximum in the window.
pub fn mini_chart_domain(window: &[DailyRecord]) -> Extent {
    match (
        min_of(window.iter().map(|r| r.min_temperature)),
        max_of(window.iter().map(|r| r.max_temperature)),
    ) {
        (Some(min), Some(max)) => Extent::new(min, max),
        _ => Extent::FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min)
    }

    fn flat(year: i32, month: u32, max: Option<f64>, min: Option<f64>) -> FlatSummaryRecord {
        FlatSummaryRecord {
            year,
            month,
            max,
            min,
        }
    }

    #[test]
    fn extent_bounds_every_value() {
        let values = vec![Some(3.0), Some(-7.5), None, Some(12.25), Some(0.0)];
        let e = extent(values.clone()).unwrap();
        assert_eq!(e, Extent::new(-7.5, 12.25));
        for v in values.into_iter().flatten() {
            assert!(e.contains(v));
        }
    }

    #[test]
    fn extent_of_nothing_is_none() {
        assert_eq!(extent(Vec::<Option<f64>>::new()), None);
        assert_eq!(extent(vec![None::<f64>, None]), None);
        assert_eq!(max_of(vec![None::<f64>]), None);
        assert_eq!(min_of(Vec::<Option<f64>>::new()), None);
    }

    #[test]
    fn single_value_extent_is_degenerate() {
        let e = extent(vec![Some(4.0)]).unwrap();
        assert_eq!(e, Extent::new(4.0, 4.0));
        assert_eq!(e.span(), 0.0);
    }

    #[test]
    fn summary_extent_follows_mode() {
        let summary = vec![
            flat(2020, 1, Some(15.0), Some(-2.0)),
            flat(2021, 6, Some(30.0), Some(20.0)),
            flat(2021, 7, None, Some(22.0)),
        ];
        assert_eq!(summary_extent(&summary, Mode::Max), Extent::new(15.0, 30.0));
        assert_eq!(summary_extent(&summary, Mode::Min), Extent::new(-2.0, 22.0));
        assert_eq!(summary_color_domain(&summary), Extent::new(-2.0, 30.0));
    }

    #[test]
    fn detail_extent_uses_raw_values() {
        let window = vec![
            day(2020, 1, 5, 10.0, -2.0),
            day(2020, 1, 20, 15.0, 0.0),
            DailyRecord::from_fields(Some("2020-02-01"), Some("x"), Some("-9")),
        ];
        assert_eq!(detail_extent(&window, Mode::Max), Extent::new(10.0, 15.0));
        assert_eq!(detail_extent(&window, Mode::Min), Extent::new(-9.0, 0.0));
        assert_eq!(mini_chart_domain(&window), Extent::new(-9.0, 15.0));
    }

    #[test]
    fn empty_inputs_fall_back() {
        assert_eq!(summary_extent(&[], Mode::Max), Extent::FALLBACK);
        assert_eq!(detail_extent(&[], Mode::Min), Extent::FALLBACK);
        assert_eq!(summary_color_domain(&[]), Extent::FALLBACK);
        assert_eq!(mini_chart_domain(&[]), Extent::FALLBACK);
    }

    #[test]
    fn extent_serializes_as_pair() {
        let json = serde_json::to_string(&Extent::new(-2.0, 30.5)).unwrap();
        assert_eq!(json, "[-2.0,30.5]");
    }
}
