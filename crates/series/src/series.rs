//! Time-ordered grid series for one climate variable.

use std::fmt;

use notus_grid::{Extent, Grid};

use crate::error::SeriesError;
use crate::month_bin::MonthBin;
use crate::stamp::MonthStamp;

/// The climate variables the pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    /// Monthly precipitation.
    Precipitation,
    /// Monthly potential evapotranspiration.
    Pet,
}

impl Variable {
    /// Stable lowercase name, used in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variable::Precipitation => "precipitation",
            Variable::Pet => "pet",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered sequence of (timestamp, grid) pairs for one variable.
///
/// Immutable after construction. All member grids share one spatial domain
/// (shape and extent), validated at construction time.
#[derive(Debug, Clone)]
pub struct GridSeries {
    variable: Variable,
    entries: Vec<(MonthStamp, Grid)>,
}

impl GridSeries {
    /// Builds a series, validating that every grid shares the domain of the
    /// first. Entries are sorted chronologically.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::DomainMismatch`] naming the first offending
    /// entry.
    pub fn new(
        variable: Variable,
        mut entries: Vec<(MonthStamp, Grid)>,
    ) -> Result<Self, SeriesError> {
        if let Some((_, first)) = entries.first() {
            let shape = first.shape();
            let extent = first.extent();
            for (index, (_, g)) in entries.iter().enumerate().skip(1) {
                if g.shape() != shape || g.extent() != extent {
                    return Err(SeriesError::DomainMismatch { index });
                }
            }
        }
        entries.sort_by_key(|(stamp, _)| *stamp);
        Ok(Self { variable, entries })
    }

    /// The variable this series carries.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// Number of (timestamp, grid) pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the series holds no grids.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (MonthStamp, &Grid)> {
        self.entries.iter().map(|(s, g)| (*s, g))
    }

    /// Shared spatial domain of the series, if non-empty.
    pub fn domain(&self) -> Option<(usize, usize, Extent)> {
        self.entries
            .first()
            .map(|(_, g)| (g.rows(), g.cols(), g.extent()))
    }

    /// All grids whose timestamp falls in `bin`, irrespective of year, in
    /// chronological order.
    pub fn select_bin(&self, bin: MonthBin) -> Vec<&Grid> {
        self.entries
            .iter()
            .filter(|(stamp, _)| stamp.bin() == bin)
            .map(|(_, g)| g)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notus_grid::Extent;

    fn entry(year: i32, month: u8, value: f64) -> (MonthStamp, Grid) {
        (
            MonthStamp::new(year, month).unwrap(),
            Grid::constant(2, 2, Extent::unit(), value).unwrap(),
        )
    }

    #[test]
    fn construction_sorts_chronologically() {
        let s = GridSeries::new(
            Variable::Precipitation,
            vec![entry(2016, 1, 3.0), entry(2015, 6, 1.0), entry(2015, 12, 2.0)],
        )
        .unwrap();
        let stamps: Vec<String> = s.iter().map(|(st, _)| st.to_string()).collect();
        assert_eq!(stamps, vec!["2015-06", "2015-12", "2016-01"]);
    }

    #[test]
    fn rejects_domain_mismatch() {
        let odd = (
            MonthStamp::new(2015, 2).unwrap(),
            Grid::constant(3, 3, Extent::unit(), 1.0).unwrap(),
        );
        let result = GridSeries::new(Variable::Pet, vec![entry(2015, 1, 1.0), odd]);
        assert!(matches!(
            result,
            Err(SeriesError::DomainMismatch { index: 1 })
        ));
    }

    #[test]
    fn select_bin_spans_years() {
        let s = GridSeries::new(
            Variable::Precipitation,
            vec![
                entry(2015, 3, 1.0),
                entry(2016, 3, 2.0),
                entry(2015, 4, 9.0),
            ],
        )
        .unwrap();

        let march = s.select_bin(MonthBin::new(3).unwrap());
        assert_eq!(march.len(), 2);
        let june = s.select_bin(MonthBin::new(6).unwrap());
        assert!(june.is_empty());
    }

    #[test]
    fn bins_partition_the_series() {
        // Two full years: every entry lands in exactly one bin.
        let mut entries = Vec::new();
        for year in [2015, 2016] {
            for month in 1..=12 {
                entries.push(entry(year, month, f64::from(month)));
            }
        }
        let s = GridSeries::new(Variable::Precipitation, entries).unwrap();

        let total: usize = MonthBin::all()
            .iter()
            .map(|&b| s.select_bin(b).len())
            .sum();
        assert_eq!(total, s.len());
        for b in MonthBin::all() {
            assert_eq!(s.select_bin(b).len(), 2);
        }
    }

    #[test]
    fn empty_series_has_no_domain() {
        let s = GridSeries::new(Variable::Pet, vec![]).unwrap();
        assert!(s.is_empty());
        assert!(s.domain().is_none());
    }

    #[test]
    fn variable_display() {
        assert_eq!(Variable::Precipitation.to_string(), "precipitation");
        assert_eq!(Variable::Pet.to_string(), "pet");
    }
}
