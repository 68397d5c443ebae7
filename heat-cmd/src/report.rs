//! Plain-text renderings of the heatmap model.

use heat_data::{view::MonthCell, Extent, Extents, FlatDetailRecord, FlatSummaryRecord, HeatmapModel};
use heat_record::Mode;
use heat_utils::dates::month_name;
use std::fmt::Write;

fn value(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

fn range(extent: &Extent) -> String {
    format!("[{:.1}, {:.1}]", extent.min, extent.max)
}

fn sorted<C: MonthCell>(cells: &[C]) -> Vec<&C> {
    let mut cells: Vec<&C> = cells.iter().collect();
    cells.sort_by_key(|c| c.key());
    cells
}

fn label(year: i32, month: u32) -> String {
    format!("{} {:<9}", year, month_name(month).unwrap_or("?"))
}

pub fn format_summary(model: &HeatmapModel, mode: Mode) -> String {
    let extents = model.extents(mode);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Summary by {}: legend {}, colors {}",
        mode,
        range(&extents.summary),
        range(&extents.summary_color)
    );
    for FlatSummaryRecord { year, month, max, min } in sorted(&model.summary).into_iter().copied() {
        let _ = writeln!(out, "{}  max {:>6}  min {:>6}", label(year, month), value(max), value(min));
    }
    out
}

pub fn format_detail(model: &HeatmapModel, mode: Mode) -> String {
    let extents = model.extents(mode);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Detail by {} over the last {} years: colors {}, mini charts {}",
        mode,
        model.window_years,
        range(&extents.detail),
        range(&extents.mini_chart)
    );
    for cell in sorted(&model.detail) {
        let FlatDetailRecord { year, month, days } = cell;
        let _ = writeln!(
            out,
            "{}  {} {:>6}  days {:>2}",
            label(*year, *month),
            mode,
            value(cell.cell_value(mode)),
            days.len()
        );
    }
    out
}

pub fn format_extents(extents: &Extents, mode: Mode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "mode           {}", mode);
    let _ = writeln!(out, "summary        {}", range(&extents.summary));
    let _ = writeln!(out, "summary_color  {}", range(&extents.summary_color));
    let _ = writeln!(out, "detail         {}", range(&extents.detail));
    let _ = writeln!(out, "mini_chart     {}", range(&extents.mini_chart));
    out
}
