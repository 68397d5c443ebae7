use crate::InputArgs;
use anyhow::Context;
use heat_data::HeatmapModel;
use heat_record::{DataSource, ParsedRecords};
use log::{info, warn};

/// Load the table named by `input` and run the aggregation pipeline once.
pub async fn load_model(input: &InputArgs) -> anyhow::Result<HeatmapModel> {
    let options = input.parse_options()?;
    let source = DataSource::parse(&input.input);
    info!("Loading {}", source);
    let parsed = source
        .load(&options)
        .await
        .with_context(|| format!("failed to load temperature table from {}", source))?;
    Ok(build_model(parsed, input.window_years))
}

pub fn build_model(parsed: ParsedRecords, window_years: u32) -> HeatmapModel {
    let report = parsed.report;
    if report.has_sentinels() {
        warn!(
            "{} rows parsed with placeholders: {} invalid dates, {} missing max, {} missing min",
            report.rows,
            report.invalid_dates,
            report.missing_max,
            report.missing_min
        );
    }
    HeatmapModel::build(&parsed.records, window_years)
}
