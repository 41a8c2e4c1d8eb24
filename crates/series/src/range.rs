//! Inclusive year-month date ranges.

use crate::error::SeriesError;
use crate::stamp::MonthStamp;

/// An inclusive range of month stamps, the temporal scope of one pipeline
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: MonthStamp,
    end: MonthStamp,
}

impl DateRange {
    /// Creates a range from start/end stamps.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidRange`] if `start` is after `end`.
    pub fn new(start: MonthStamp, end: MonthStamp) -> Result<Self, SeriesError> {
        if start > end {
            return Err(SeriesError::InvalidRange {
                start_year: start.year(),
                start_month: start.month(),
                end_year: end.year(),
                end_month: end.month(),
            });
        }
        Ok(Self { start, end })
    }

    /// Convenience constructor from raw year/month components.
    pub fn from_ymd(
        start_year: i32,
        start_month: u8,
        end_year: i32,
        end_month: u8,
    ) -> Result<Self, SeriesError> {
        Self::new(
            MonthStamp::new(start_year, start_month)?,
            MonthStamp::new(end_year, end_month)?,
        )
    }

    /// First stamp in the range.
    pub fn start(&self) -> MonthStamp {
        self.start
    }

    /// Last stamp in the range (inclusive).
    pub fn end(&self) -> MonthStamp {
        self.end
    }

    /// True if `stamp` falls within the range.
    pub fn contains(&self, stamp: MonthStamp) -> bool {
        self.start <= stamp && stamp <= self.end
    }

    /// Number of months covered, inclusive of both endpoints.
    pub fn n_months(&self) -> usize {
        let span = (self.end.year() - self.start.year()) * 12
            + i32::from(self.end.month())
            - i32::from(self.start.month());
        span as usize + 1
    }

    /// Iterates every stamp in the range in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = MonthStamp> {
        let end = self.end;
        let mut next = Some(self.start);
        std::iter::from_fn(move || {
            let current = next?;
            next = if current < end {
                Some(current.next())
            } else {
                None
            };
            Some(current)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(
            DateRange::from_ymd(2024, 1, 2015, 12),
            Err(SeriesError::InvalidRange { .. })
        ));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = DateRange::from_ymd(2015, 1, 2016, 12).unwrap();
        assert!(r.contains(MonthStamp::new(2015, 1).unwrap()));
        assert!(r.contains(MonthStamp::new(2016, 12).unwrap()));
        assert!(r.contains(MonthStamp::new(2015, 7).unwrap()));
        assert!(!r.contains(MonthStamp::new(2014, 12).unwrap()));
        assert!(!r.contains(MonthStamp::new(2017, 1).unwrap()));
    }

    #[test]
    fn n_months_counts_both_endpoints() {
        assert_eq!(DateRange::from_ymd(2015, 1, 2015, 1).unwrap().n_months(), 1);
        assert_eq!(
            DateRange::from_ymd(2015, 1, 2016, 12).unwrap().n_months(),
            24
        );
        assert_eq!(DateRange::from_ymd(2015, 11, 2016, 2).unwrap().n_months(), 4);
    }

    #[test]
    fn iter_is_chronological_and_complete() {
        let r = DateRange::from_ymd(2015, 11, 2016, 2).unwrap();
        let stamps: Vec<String> = r.iter().map(|s| s.to_string()).collect();
        assert_eq!(stamps, vec!["2015-11", "2015-12", "2016-01", "2016-02"]);
    }
}
