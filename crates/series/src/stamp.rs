//! Year-month timestamps for monthly grids.

use std::fmt;

use crate::error::SeriesError;
use crate::month_bin::MonthBin;

/// A (year, month) timestamp. Monthly composites never need day-level
/// resolution, so this is the full temporal precision of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthStamp {
    year: i32,
    month: u8,
}

impl MonthStamp {
    /// Creates a stamp, validating the month.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidMonth`] outside 1..=12.
    pub fn new(year: i32, month: u8) -> Result<Self, SeriesError> {
        if !(1..=12).contains(&month) {
            return Err(SeriesError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The aggregation bin this stamp falls into.
    pub fn bin(&self) -> MonthBin {
        // Month was validated at construction.
        MonthBin::new(self.month).expect("validated month")
    }

    /// The stamp one month later.
    pub fn next(&self) -> MonthStamp {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for MonthStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
