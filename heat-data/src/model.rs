//! The whole pipeline for one loaded dataset.
//!
//! [`HeatmapModel::build`] runs the aggregation once. The mode toggle then only
//! calls [`HeatmapModel::view`], or the free function [`derive_extents`],
//! and neither touches the aggregated data.

use crate::{
    aggregate::{group_sorted, summarize},
    extent::{detail_extent, mini_chart_domain, summary_color_domain, summary_extent, Extent},
    view::{flatten_detail, flatten_summary, month_domain, year_domain, FlatDetailRecord, FlatSummaryRecord},
    window::window_recent_years,
};
use heat_record::{DailyRecord, Mode};
use serde::Serialize;

/// Every scale domain the two heatmaps need for one mode.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Extents {
    /// Summary legend: extent of the monthly `.max` or `.min` values.
    pub summary: Extent,
    /// Summary cell colors: lowest monthly min to highest monthly max.
    pub summary_color: Extent,
    /// Detail cell colors and legend: raw windowed max or min temperatures.
    pub detail: Extent,
    /// Shared y-domain of the mini line charts.
    pub mini_chart: Extent,
}

/// Pure mode → extents transition. Call it again on every toggle.
pub fn derive_extents(mode: Mode, summary: &[FlatSummaryRecord], window: &[DailyRecord]) -> Extents {
    Extents {
        summary: summary_extent(summary, mode),
        summary_color: summary_color_domain(summary),
        detail: detail_extent(window, mode),
        mini_chart: mini_chart_domain(window),
    }
}

/// Aggregated view data for a loaded dataset. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapModel {
    pub summary: Vec<FlatSummaryRecord>,
    pub detail: Vec<FlatDetailRecord>,
    /// Raw records inside the detail window.
    pub window: Vec<DailyRecord>,
    pub window_years: u32,
}

impl HeatmapModel {
    /// Run the pipeline: summary aggregation over everything, and windowed
    /// detail grouping over the most recent `window_years` years.
    pub fn build(records: &[DailyRecord], window_years: u32) -> Self {
        let summary = flatten_summary(summarize(records));
        let window = window_recent_years(records, window_years);
        let detail = flatten_detail(group_sorted(&window));
        log::info!(
            "model: {} summary cells, {} detail cells from {} records",
            summary.len(),
            detail.len(),
            records.len()
        );
        HeatmapModel {
            summary,
            detail,
            window,
            window_years,
        }
    }

    pub fn extents(&self, mode: Mode) -> Extents {
        derive_extents(mode, &self.summary, &self.window)
    }

    /// Everything a renderer needs for `mode`, borrowed from the model.
    pub fn view(&self, mode: Mode) -> HeatmapView<'_> {
        HeatmapView {
            mode,
            extents: self.extents(mode),
            summary: GridView {
                years: year_domain(&self.summary),
                months: month_domain(&self.summary),
                cells: &self.summary,
            },
            detail: GridView {
                years: year_domain(&self.detail),
                months: month_domain(&self.detail),
                cells: &self.detail,
            },
        }
    }
}

/// Band domains plus the cells of one heatmap.
#[derive(Debug, Serialize, PartialEq)]
pub struct GridView<'a, C> {
    pub years: Vec<i32>,
    pub months: Vec<u32>,
    pub cells: &'a [C],
}

/// Serializable render contract for both heatmaps under one mode.
#[derive(Debug, Serialize, PartialEq)]
pub struct HeatmapView<'a> {
    pub mode: Mode,
    pub extents: Extents,
    pub summary: GridView<'a, FlatSummaryRecord>,
    pub detail: GridView<'a, FlatDetailRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::DEFAULT_WINDOW_YEARS;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min)
    }

    fn records() -> Vec<DailyRecord> {
        vec![
            day(2010, 7, 1, 40.0, 25.0),
            day(2011, 12, 31, 5.0, -10.0),
            day(2020, 1, 20, 15.0, 0.0),
            day(2020, 1, 5, 10.0, -2.0),
            day(2021, 6, 1, 30.0, 20.0),
        ]
    }

    #[test]
    fn build_runs_both_paths() {
        let model = HeatmapModel::build(&records(), DEFAULT_WINDOW_YEARS);
        assert_eq!(model.summary.len(), 4);
        // 2010 and 2011 fall outside 2012-2021
        assert_eq!(model.window.len(), 3);
        assert_eq!(model.detail.len(), 2);
        let january = model.detail.iter().find(|c| c.year == 2020).unwrap();
        assert_eq!(january.days[0].date, NaiveDate::from_ymd_opt(2020, 1, 5));
    }

    #[test]
    fn extents_switch_with_mode_only() {
        let model = HeatmapModel::build(&records(), DEFAULT_WINDOW_YEARS);
        let max = model.extents(Mode::Max);
        let min = model.extents(Mode::Min);

        assert_eq!(max.summary, Extent::new(5.0, 40.0));
        assert_eq!(min.summary, Extent::new(-10.0, 25.0));
        assert_eq!(max.detail, Extent::new(10.0, 30.0));
        assert_eq!(min.detail, Extent::new(-2.0, 20.0));

        assert_eq!(max.summary_color, min.summary_color);
        assert_eq!(max.summary_color, Extent::new(-10.0, 40.0));
        assert_eq!(max.mini_chart, min.mini_chart);
        assert_eq!(max.mini_chart, Extent::new(-2.0, 30.0));
    }

    #[test]
    fn toggling_leaves_model_untouched() {
        let model = HeatmapModel::build(&records(), DEFAULT_WINDOW_YEARS);
        let before = model.clone();
        let first = model.view(Mode::Max).extents;
        let _ = model.view(Mode::Min);
        let again = model.view(Mode::Max).extents;
        assert_eq!(first, again);
        assert_eq!(model, before);
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let a = HeatmapModel::build(&records(), DEFAULT_WINDOW_YEARS);
        let b = HeatmapModel::build(&records(), DEFAULT_WINDOW_YEARS);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_dataset_gives_fallback_extents() {
        let model = HeatmapModel::build(&[], DEFAULT_WINDOW_YEARS);
        assert!(model.summary.is_empty());
        assert!(model.detail.is_empty());
        let extents = model.extents(Mode::default());
        assert_eq!(
            extents,
            Extents {
                summary: Extent::FALLBACK,
                summary_color: Extent::FALLBACK,
                detail: Extent::FALLBACK,
                mini_chart: Extent::FALLBACK,
            }
        );
    }

    #[test]
    fn view_carries_sorted_domains() {
        let model = HeatmapModel::build(&records(), DEFAULT_WINDOW_YEARS);
        let view = model.view(Mode::Max);
        assert_eq!(view.summary.years, vec![2010, 2011, 2020, 2021]);
        assert_eq!(view.summary.months, vec![1, 6, 7, 12]);
        assert_eq!(view.detail.years, vec![2020, 2021]);
        assert_eq!(view.detail.months, vec![1, 6]);
    }

    #[test]
    fn view_serializes_to_render_contract() {
        let model = HeatmapModel::build(&[day(2021, 6, 1, 30.0, 20.0)], DEFAULT_WINDOW_YEARS);
        let json = serde_json::to_value(model.view(Mode::Min)).unwrap();
        assert_eq!(json["mode"], "min");
        assert_eq!(json["extents"]["summary"], serde_json::json!([20.0, 20.0]));
        assert_eq!(json["summary"]["cells"][0]["max"], 30.0);
        assert_eq!(json["detail"]["cells"][0]["days"][0]["date"], "2021-06-01");
    }

    #[test]
    fn infinite_cells_never_reach_extents() {
        let csv = "\
date,max_temperature,min_temperature
2021-06-01,inf,20
2021-06-02,30,-infinity
";
        let parsed = heat_record::parse_records(csv.as_bytes(), &heat_record::ParseOptions::default()).unwrap();
        let model = HeatmapModel::build(&parsed.records, DEFAULT_WINDOW_YEARS);
        let extents = model.extents(Mode::Max);
        assert_eq!(extents.summary, Extent::new(30.0, 30.0));
        assert_eq!(extents.summary_color, Extent::new(20.0, 30.0));
        assert_eq!(extents.detail, Extent::new(30.0, 30.0));
        assert_eq!(extents.mini_chart, Extent::new(20.0, 30.0));
        let json = serde_json::to_value(extents).unwrap();
        assert_eq!(json["mini_chart"], serde_json::json!([20.0, 30.0]));
    }
}
