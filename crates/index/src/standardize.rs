//! Standardization: cross-bin per-pixel mean/stdDev over the 12 water
//! balance grids, applied identically to every bin.
//!
//! This is a deliberately simplified statistic, not a bug: a true SPEI
//! fits a per-calendar-month distribution across years, while this engine
//! normalizes each bin against the spread of the 12 monthly composites
//! themselves. The simplification is part of the contract and must not be
//! silently "fixed" to a climatological fit.

use tracing::{debug, warn};

use notus_grid::{is_no_data, ops, CrossStats, Grid, reduce};
use notus_series::MonthBin;

use crate::balance::WaterBalanceGrid;
use crate::error::IndexError;

/// Per-bin standardized index grid: (balance − mean) / stdDev, pixelwise.
#[derive(Debug, Clone)]
pub struct StandardizedIndexGrid {
    bin: MonthBin,
    grid: Grid,
}

impl StandardizedIndexGrid {
    /// Creates a tagged index grid. Used by the summary stage to re-tag
    /// clipped grids.
    pub(crate) fn new(bin: MonthBin, grid: Grid) -> Self {
        Self { bin, grid }
    }

    /// The bin tag (calendar month 1..=12).
    pub fn bin(&self) -> MonthBin {
        self.bin
    }

    /// The standardized index grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

/// Output of the standardization stage.
#[derive(Debug, Clone)]
pub struct StandardizeResult {
    grids: Vec<StandardizedIndexGrid>,
    stats: CrossStats,
    degenerate_pixels: usize,
}

impl StandardizeResult {
    /// The 12 standardized index grids in bin order.
    pub fn grids(&self) -> &[StandardizedIndexGrid] {
        &self.grids
    }

    /// The single cross-bin statistics grid pair used for every bin.
    pub fn stats(&self) -> &CrossStats {
        &self.stats
    }

    /// Number of pixels whose stdDev was zero or non-finite. Such pixels
    /// are no-data in every output grid.
    pub fn degenerate_pixels(&self) -> usize {
        self.degenerate_pixels
    }
}

/// Standardizes the 12 water balance grids against their cross-bin mean
/// and sample standard deviation.
///
/// The mean and stdDev grids are computed exactly once and reused for
/// every bin. Pixels with a zero or non-finite stdDev propagate as
/// no-data; division by zero never yields a finite value or a signed
/// infinity.
///
/// # Errors
///
/// Returns [`IndexError::BinCount`] unless exactly 12 grids are supplied,
/// and grid-domain errors if the inputs do not share one spatial domain.
pub fn standardize(balance: &[WaterBalanceGrid]) -> Result<StandardizeResult, IndexError> {
    if balance.len() != 12 {
        return Err(IndexError::BinCount {
            expected: 12,
            got: balance.len(),
        });
    }

    let inputs: Vec<&Grid> = balance.iter().map(|wb| wb.grid()).collect();
    let stats = reduce::cross_stats(&inputs)?;

    let degenerate_pixels = stats
        .std_dev
        .values()
        .iter()
        .filter(|&&sd| is_no_data(sd) || sd == 0.0)
        .count();
    if degenerate_pixels > 0 {
        warn!(
            pixels = degenerate_pixels,
            "degenerate stdDev pixels will be no-data in every index grid"
        );
    }

    let mut grids = Vec::with_capacity(12);
    for wb in balance {
        let anomaly = ops::subtract(wb.grid(), &stats.mean)?;
        let grid = ops::divide(&anomaly, &stats.std_dev)?;
        debug!(bin = wb.bin().get(), "standardized month bin");
        grids.push(StandardizedIndexGrid {
            bin: wb.bin(),
            grid,
        });
    }

    Ok(StandardizeResult {
        grids,
        stats,
        degenerate_pixels,
    })
}
