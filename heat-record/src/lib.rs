//! Core types and loading for daily temperature tables.
//!
//! ```rust
//! use heat_record::{parse_records, Mode, MonthKey, ParseOptions};
//!
//! let csv = "date,max_temperature,min_temperature\n2021-06-01,30,20\n";
//! let parsed = parse_records(csv.as_bytes(), &ParseOptions::default()).unwrap();
//! assert_eq!(parsed.records[0].month_key(), Some(MonthKey::new(2021, 6)));
//! assert_eq!(Mode::default(), Mode::Max);
//! ```

pub mod error;
pub mod mode;
pub mod month_key;
pub mod record;
pub mod source;

pub use error::LoadError;
pub use mode::Mode;
pub use month_key::MonthKey;
pub use record::{parse_records, Columns, DailyRecord, ParseOptions, ParseReport, ParsedRecords};
pub use source::DataSource;
