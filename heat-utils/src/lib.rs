//! Shared utility functions for the heatmap crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, Month, NaiveDate};

    /// Calendar date format used by the daily temperature table: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Calendar year and 1-indexed month of a date.
    pub fn year_month(date: &NaiveDate) -> (i32, u32) {
        (date.year(), date.month())
    }

    /// Full English month name for a 1-indexed month, e.g. 1 -> "January".
    ///
    /// Used for month axis ticks. Returns None outside 1..=12.
    pub fn month_name(month: u32) -> Option<&'static str> {
        u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
    }

}
