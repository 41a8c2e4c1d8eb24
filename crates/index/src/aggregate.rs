//! Monthly aggregation: bins a grid series by calendar month and reduces
//! each bin to one composite by pixelwise summation.

use tracing::debug;

use notus_grid::{reduce, Grid};
use notus_series::{GridSeries, MonthBin, Variable};

use crate::error::IndexError;

/// One per-bin composite grid: the pixelwise sum of every grid in the
/// series whose timestamp falls in `bin`, across all covered years.
#[derive(Debug, Clone)]
pub struct MonthlyComposite {
    bin: MonthBin,
    variable: Variable,
    grid: Grid,
    source_count: usize,
}

impl MonthlyComposite {
    /// The bin tag (calendar month 1..=12).
    pub fn bin(&self) -> MonthBin {
        self.bin
    }

    /// The source variable.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// The composite grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of source grids summed into this composite.
    pub fn source_count(&self) -> usize {
        self.source_count
    }

    /// True if no source grid contributed (the date range excluded this
    /// month entirely). Empty composites are all no-data and unusable by
    /// later stages.
    pub fn is_empty(&self) -> bool {
        self.source_count == 0
    }
}

/// Aggregates a series into exactly 12 composites, one per calendar-month
/// bin, in bin order 1..12.
///
/// A bin that selects zero grids yields an empty all-no-data composite
/// rather than an error; the water-balance stage rejects empty composites
/// when they are actually required.
///
/// # Errors
///
/// Returns [`IndexError::EmptySeries`] for a series with no grids at all,
/// since no output domain can be established.
pub fn aggregate_monthly(series: &GridSeries) -> Result<Vec<MonthlyComposite>, IndexError> {
    let variable = series.variable();
    let (rows, cols, extent) = series.domain().ok_or(IndexError::EmptySeries {
        variable: variable.as_str(),
    })?;

    let mut composites = Vec::with_capacity(12);
    for bin in MonthBin::all() {
        let members = series.select_bin(bin);
        let (grid, source_count) = if members.is_empty() {
            (Grid::no_data(rows, cols, extent)?, 0)
        } else {
            (reduce::sum(&members)?, members.len())
        };
        debug!(
            variable = variable.as_str(),
            bin = bin.get(),
            sources = source_count,
            "aggregated month bin"
        );
        composites.push(MonthlyComposite {
            bin,
            variable,
            grid,
            source_count,
        });
    }
    Ok(composites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use notus_grid::Extent;
    use notus_series::MonthStamp;

    fn entry(year: i32, month: u8, value: f64) -> (MonthStamp, Grid) {
        (
            MonthStamp::new(year, month).unwrap(),
            Grid::constant(2, 2, Extent::unit(), value).unwrap(),
        )
    }

    fn two_full_years(value: f64) -> GridSeries {
        let mut entries = Vec::new();
        for year in [2015, 2016] {
            for month in 1..=12 {
                entries.push(entry(year, month, value));
            }
        }
        GridSeries::new(Variable::Precipitation, entries).unwrap()
    }

    #[test]
    fn produces_twelve_composites_in_bin_order() {
        let composites = aggregate_monthly(&two_full_years(100.0)).unwrap();
        assert_eq!(composites.len(), 12);
        for (i, c) in composites.iter().enumerate() {
            assert_eq!(c.bin().index(), i);
            assert_eq!(c.variable(), Variable::Precipitation);
            assert_eq!(c.source_count(), 2);
        }
    }

    #[test]
    fn sums_across_years() {
        // Constant 100 per month over 2 years: every composite sums to 200.
        let composites = aggregate_monthly(&two_full_years(100.0)).unwrap();
        for c in &composites {
            assert_relative_eq!(c.grid().get(0, 0), 200.0);
            assert_relative_eq!(c.grid().get(1, 1), 200.0);
        }
    }

    #[test]
    fn empty_bin_yields_empty_composite() {
        // Only January and February data.
        let series = GridSeries::new(
            Variable::Pet,
            vec![entry(2015, 1, 5.0), entry(2015, 2, 6.0)],
        )
        .unwrap();
        let composites = aggregate_monthly(&series).unwrap();

        assert_eq!(composites.len(), 12);
        assert!(!composites[0].is_empty());
        assert!(!composites[1].is_empty());
        for c in &composites[2..] {
            assert!(c.is_empty());
            assert_eq!(c.grid().valid_count(), 0);
        }
    }

    #[test]
    fn empty_series_is_an_error() {
        let series = GridSeries::new(Variable::Pet, vec![]).unwrap();
        assert!(matches!(
            aggregate_monthly(&series),
            Err(IndexError::EmptySeries { variable: "pet" })
        ));
    }

    #[test]
    fn no_data_pixels_do_not_poison_sums() {
        let mut jan_a = Grid::constant(1, 2, Extent::unit(), 10.0).unwrap();
        jan_a.set(0, 1, f64::NAN);
        let jan_b = Grid::constant(1, 2, Extent::unit(), 5.0).unwrap();
        let series = GridSeries::new(
            Variable::Precipitation,
            vec![
                (MonthStamp::new(2015, 1).unwrap(), jan_a),
                (MonthStamp::new(2016, 1).unwrap(), jan_b),
            ],
        )
        .unwrap();

        let composites = aggregate_monthly(&series).unwrap();
        assert_relative_eq!(composites[0].grid().get(0, 0), 15.0);
        // Only one finite contributor at (0, 1).
        assert_relative_eq!(composites[0].grid().get(0, 1), 5.0);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let series = two_full_years(42.0);
        let a = aggregate_monthly(&series).unwrap();
        let b = aggregate_monthly(&series).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!(x.grid().bit_eq(y.grid()));
        }
    }
}
