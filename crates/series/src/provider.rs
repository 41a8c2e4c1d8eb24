//! The provider seam: where aligned monthly grids come from.

use std::collections::BTreeMap;

use notus_grid::{Grid, Region};

use crate::error::SeriesError;
use crate::range::DateRange;
use crate::series::{GridSeries, Variable};
use crate::stamp::MonthStamp;

/// Supplies a time-ordered series of single-band monthly grids for a
/// variable, already filtered to a region and date range.
///
/// The pipeline trusts providers to perform spatial and temporal filtering;
/// it does no date-range validation of its own beyond the month validation
/// built into [`MonthStamp`].
pub trait GridSeriesProvider {
    /// Fetches the series for `variable` over `region` and `range`.
    fn fetch_series(
        &self,
        variable: Variable,
        region: &Region,
        range: &DateRange,
    ) -> Result<GridSeries, SeriesError>;
}

/// In-memory provider backed by pre-loaded grids, used by tests and
/// fixtures.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProvider {
    entries: BTreeMap<(Variable, MonthStamp), Grid>,
}

impl InMemoryProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one monthly grid, replacing any existing grid for the same
    /// variable and stamp.
    pub fn insert(&mut self, variable: Variable, stamp: MonthStamp, grid: Grid) {
        self.entries.insert((variable, stamp), grid);
    }

    /// Number of stored grids across all variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no grids are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GridSeriesProvider for InMemoryProvider {
    fn fetch_series(
        &self,
        variable: Variable,
        _region: &Region,
        range: &DateRange,
    ) -> Result<GridSeries, SeriesError> {
        let entries: Vec<(MonthStamp, Grid)> = self
            .entries
            .iter()
            .filter(|((v, stamp), _)| *v == variable && range.contains(*stamp))
            .map(|((_, stamp), grid)| (*stamp, grid.clone()))
            .collect();
        GridSeries::new(variable, entries)
    }
}
