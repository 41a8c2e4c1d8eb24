//! Water balance: precipitation composite minus PET composite, per
//! calendar-month bin.

use tracing::debug;

use notus_grid::{ops, Grid};
use notus_series::{MonthBin, Variable};

use crate::aggregate::MonthlyComposite;
use crate::error::IndexError;

/// Per-bin water balance grid: precipitation − PET for one calendar month.
#[derive(Debug, Clone)]
pub struct WaterBalanceGrid {
    bin: MonthBin,
    grid: Grid,
}

impl WaterBalanceGrid {
    /// The bin tag (calendar month 1..=12).
    pub fn bin(&self) -> MonthBin {
        self.bin
    }

    /// The water balance grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

/// Computes the 12 per-bin water balance grids.
///
/// Composites are located by bin tag, never by position: the two input
/// slices are not required to be ordered, only complete. A missing tag is
/// a [`IndexError::CompositeLookup`]; a tag whose composite has zero
/// contributing source grids is a [`IndexError::MissingBin`].
pub fn water_balance(
    precip: &[MonthlyComposite],
    pet: &[MonthlyComposite],
) -> Result<Vec<WaterBalanceGrid>, IndexError> {
    let mut balance = Vec::with_capacity(12);
    for bin in MonthBin::all() {
        let p = find_composite(precip, Variable::Precipitation, bin)?;
        let e = find_composite(pet, Variable::Pet, bin)?;
        let grid = ops::subtract(p.grid(), e.grid())?;
        debug!(bin = bin.get(), "computed water balance");
        balance.push(WaterBalanceGrid { bin, grid });
    }
    Ok(balance)
}

/// Locates the composite for (`variable`, `bin`) and rejects empty ones.
fn find_composite(
    composites: &[MonthlyComposite],
    variable: Variable,
    bin: MonthBin,
) -> Result<&MonthlyComposite, IndexError> {
    let c = composites
        .iter()
        .find(|c| c.variable() == variable && c.bin() == bin)
        .ok_or(IndexError::CompositeLookup {
            variable: variable.as_str(),
            bin: bin.get(),
        })?;
    if c.is_empty() {
        return Err(IndexError::MissingBin {
            variable: variable.as_str(),
            bin: bin.get(),
        });
    }
    Ok(c)
}
