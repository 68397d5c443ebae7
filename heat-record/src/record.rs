use crate::{error::LoadError, month_key::MonthKey};
use chrono::{Datelike, NaiveDate};
use csv::{ByteRecord, ReaderBuilder, Trim};
use heat_utils::dates::parse_date;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A single day of temperature observations.
///
/// Parse failures are kept on the record instead of failing the batch:
/// - `date` is `None` when the date column does not match `YYYY-MM-DD`
/// - a temperature is `None` when its column is empty, non-numeric, not
///   valid UTF-8, `NaN` or infinite
///
/// An empty temperature field is missing, not zero. Plain numeric coercion
/// would read it as `0`.
///
/// `max_temperature >= min_temperature` is not checked; source data passes
/// through as-is.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: Option<NaiveDate>,
    pub max_temperature: Option<f64>,
    pub min_temperature: Option<f64>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, max_temperature: f64, min_temperature: f64) -> Self {
        DailyRecord {
            date: Some(date),
            max_temperature: Some(max_temperature),
            min_temperature: Some(min_temperature),
        }
    }

    /// Build a record from raw field text, substituting `None` for anything
    /// that does not parse.
    pub fn from_fields(date: Option<&str>, max: Option<&str>, min: Option<&str>) -> Self {
        DailyRecord {
            date: date.and_then(|s| parse_date(s).ok()),
            max_temperature: parse_temperature(max),
            min_temperature: parse_temperature(min),
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    /// The (year, month) bucket this record belongs to, or `None` for an
    /// undated record.
    pub fn month_key(&self) -> Option<MonthKey> {
        self.date.as_ref().map(MonthKey::from_date)
    }
}

fn parse_temperature(s: Option<&str>) -> Option<f64> {
    s.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Header names of the three columns the parser reads.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Columns {
    pub date: String,
    pub max_temperature: String,
    pub min_temperature: String,
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            date: "date".to_string(),
            max_temperature: "max_temperature".to_string(),
            min_temperature: "min_temperature".to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct ParseOptions {
    pub columns: Columns,
    pub delimiter: u8,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            columns: Columns::default(),
            delimiter: b',',
        }
    }
}

/// Counts of rows and of the sentinels substituted while parsing.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct ParseReport {
    pub rows: usize,
    pub invalid_dates: usize,
    pub missing_max: usize,
    pub missing_min: usize,
}

impl ParseReport {
    fn count(&mut self, record: &DailyRecord) {
        self.rows += 1;
        if record.date.is_none() {
            self.invalid_dates += 1;
        }
        if record.max_temperature.is_none() {
            self.missing_max += 1;
        }
        if record.min_temperature.is_none() {
            self.missing_min += 1;
        }
    }

    pub fn has_sentinels(&self) -> bool {
        self.invalid_dates > 0 || self.missing_max > 0 || self.missing_min > 0
    }
}

#[derive(Debug, Clone)]
pub struct ParsedRecords {
    pub records: Vec<DailyRecord>,
    pub report: ParseReport,
}

struct ColumnIndices {
    date: usize,
    max_temperature: usize,
    min_temperature: usize,
}

impl ColumnIndices {
    fn locate(headers: &ByteRecord, columns: &Columns) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| std::str::from_utf8(h).is_ok_and(|h| h.trim() == name))
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };
        Ok(ColumnIndices {
            date: find(&columns.date)?,
            max_temperature: find(&columns.max_temperature)?,
            min_temperature: find(&columns.min_temperature)?,
        })
    }
}

/// Parse a delimited daily temperature table with a header row.
///
/// Fails only when the table itself is unusable (I/O, framing, or a header
/// row without one of the named columns). Bad values inside a row become
/// `None` fields. Empty input is an empty table.
///
/// ```rust
/// use heat_record::record::{parse_records, ParseOptions};
///
/// let csv = "date,max_temperature,min_temperature\n2020-01-05,10,-2\nbad,x,0\n";
/// let parsed = parse_records(csv.as_bytes(), &ParseOptions::default()).unwrap();
/// assert_eq!(parsed.records.len(), 2);
/// assert_eq!(parsed.report.invalid_dates, 1);
/// assert_eq!(parsed.records[1].max_temperature, None);
/// ```
pub fn parse_records<R: Read>(
    reader: R,
    options: &ParseOptions,
) -> Result<ParsedRecords, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut report = ParseReport::default();

    let headers = rdr.byte_headers()?;
    if headers.is_empty() {
        log::info!("loader: empty input, no header row");
        return Ok(ParsedRecords { records, report });
    }
    let indices = ColumnIndices::locate(headers, &options.columns)?;

    for result in rdr.byte_records() {
        let r = result?;
        let field = |i: usize| r.get(i).and_then(|f| std::str::from_utf8(f).ok());
        let record = DailyRecord::from_fields(
            field(indices.date),
            field(indices.max_temperature),
            field(indices.min_temperature),
        );
        report.count(&record);
        records.push(record);
    }

    log::info!("loader: parsed {} daily records", report.rows);
    if report.has_sentinels() {
        log::warn!(
            "loader: {} invalid dates, {} missing max, {} missing min",
            report.invalid_dates,
            report.missing_max,
            report.missing_min
        );
    }
    Ok(ParsedRecords { records, report })
}
