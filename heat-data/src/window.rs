use heat_record::DailyRecord;

/// Number of calendar years kept for the detail view.
pub const DEFAULT_WINDOW_YEARS: u32 = 10;

/// Latest calendar year among records with a valid date.
pub fn max_year(records: &[DailyRecord]) -> Option<i32> {
    records.iter().filter_map(|r| r.year()).max()
}

/// Keep the records from the most recent `years` calendar years, counted back
/// from the dataset's own maximum year (inclusive).
///
/// Undated records are dropped. An empty input, an input with no valid date,
/// or `years == 0` yields an empty result. Input order is preserved.
pub fn window_recent_years(records: &[DailyRecord], years: u32) -> Vec<DailyRecord> {
    let Some(latest) = max_year(records) else {
        return Vec::new();
    };
    if years == 0 {
        return Vec::new();
    }
    let span = i32::try_from(years).unwrap_or(i32::MAX) - 1;
    let earliest = latest.saturating_sub(span);

    let window: Vec<DailyRecord> = records
        .iter()
        .filter(|r| r.year().is_some_and(|year| year >= earliest))
        .copied()
        .collect();
    log::info!(
        "window: kept {} of {} records for {}-{}",
        window.len(),
        records.len(),
        earliest,
        latest
    );
    window
}
