//! Aggregation pipeline for the temperature heatmaps.
//!
//! This crate turns parsed daily records into the flat view model, band
//! domains and scale extents that the summary and detail heatmaps draw.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use heat_data::{HeatmapModel, window::DEFAULT_WINDOW_YEARS};
//! use heat_record::{DailyRecord, Mode};
//!
//! let day = |y, m, d, max, min| DailyRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min);
//! let records = vec![
//!     day(2020, 1, 5, 10.0, -2.0),
//!     day(2020, 1, 20, 15.0, 0.0),
//!     day(2021, 6, 1, 30.0, 20.0),
//! ];
//!
//! let model = HeatmapModel::build(&records, DEFAULT_WINDOW_YEARS);
//! assert_eq!(model.summary[0].max, Some(15.0));
//! assert_eq!(model.summary[0].min, Some(-2.0));
//!
//! let extents = model.extents(Mode::Max);
//! assert_eq!((extents.summary.min, extents.summary.max), (15.0, 30.0));
//! ```

pub mod aggregate;
pub mod extent;
pub mod model;
pub mod view;
pub mod window;

pub use extent::Extent;
pub use model::{derive_extents, Extents, HeatmapModel, HeatmapView};
pub use view::{FlatDetailRecord, FlatSummaryRecord};
