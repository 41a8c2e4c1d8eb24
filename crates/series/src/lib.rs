//! # notus-series
//!
//! Temporal data model for the Notus drought index pipeline: year-month
//! timestamps, the calendar-month aggregation key, inclusive date ranges,
//! the per-variable [`GridSeries`], and the [`GridSeriesProvider`] seam
//! through which monthly grids enter the pipeline.

mod error;
mod month_bin;
mod provider;
mod range;
mod series;
mod stamp;

pub use error::SeriesError;
pub use month_bin::MonthBin;
pub use provider::{GridSeriesProvider, InMemoryProvider};
pub use range::DateRange;
pub use series::{GridSeries, Variable};
pub use stamp::MonthStamp;
