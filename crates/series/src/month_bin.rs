//! Calendar-month aggregation key.

use std::fmt;

use crate::error::SeriesError;

/// A calendar month number (1..=12) used as an aggregation key across all
/// years in a date range, ignoring the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthBin(u8);

impl MonthBin {
    /// Creates a bin from a month number.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidMonth`] outside 1..=12.
    pub fn new(month: u8) -> Result<Self, SeriesError> {
        if !(1..=12).contains(&month) {
            return Err(SeriesError::InvalidMonth { month });
        }
        Ok(Self(month))
    }

    /// The month number (1..=12).
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Zero-based index, handy for per-bin arrays.
    pub fn index(&self) -> usize {
        usize::from(self.0) - 1
    }

    /// All twelve bins in calendar order.
    pub fn all() -> [MonthBin; 12] {
        [
            MonthBin(1),
            MonthBin(2),
            MonthBin(3),
            MonthBin(4),
            MonthBin(5),
            MonthBin(6),
            MonthBin(7),
            MonthBin(8),
            MonthBin(9),
            MonthBin(10),
            MonthBin(11),
            MonthBin(12),
        ]
    }
}

impl fmt::Display for MonthBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_bins() {
        assert_eq!(MonthBin::new(1).unwrap().get(), 1);
        assert_eq!(MonthBin::new(12).unwrap().get(), 12);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            MonthBin::new(0),
            Err(SeriesError::InvalidMonth { month: 0 })
        ));
        assert!(matches!(
            MonthBin::new(13),
            Err(SeriesError::InvalidMonth { month: 13 })
        ));
    }

    #[test]
    fn all_is_exhaustive_and_ordered() {
        let bins = MonthBin::all();
        assert_eq!(bins.len(), 12);
        for (i, b) in bins.iter().enumerate() {
            assert_eq!(b.index(), i);
            assert_eq!(b.get() as usize, i + 1);
        }
    }

    #[test]
    fn display_is_month_number() {
        assert_eq!(MonthBin::new(7).unwrap().to_string(), "7");
    }
}
