//! Summary product: region-clipped index grids and their temporal mean.

use tracing::debug;

use notus_grid::{clip, reduce, Grid, Region};

use crate::error::IndexError;
use crate::standardize::StandardizedIndexGrid;

/// The spatial summary handed to export and rendering collaborators.
#[derive(Debug, Clone)]
pub struct Summary {
    clipped: Vec<StandardizedIndexGrid>,
    temporal_mean: Grid,
}

impl Summary {
    /// The 12 region-clipped index grids in bin order.
    pub fn clipped(&self) -> &[StandardizedIndexGrid] {
        &self.clipped
    }

    /// Pixelwise mean across the 12 clipped grids. Pixels that are no-data
    /// in every bin (outside the region, or degenerate) stay no-data.
    pub fn temporal_mean(&self) -> &Grid {
        &self.temporal_mean
    }
}

/// Clips each index grid to the region boundary and reduces the clipped
/// set by pixelwise mean. No normalization is applied beyond what the
/// standardization stage already did.
///
/// # Errors
///
/// Returns [`IndexError::BinCount`] unless exactly 12 grids are supplied.
pub fn summarize(
    index: &[StandardizedIndexGrid],
    region: &Region,
) -> Result<Summary, IndexError> {
    if index.len() != 12 {
        return Err(IndexError::BinCount {
            expected: 12,
            got: index.len(),
        });
    }

    let clipped: Vec<StandardizedIndexGrid> = index
        .iter()
        .map(|g| {
            debug!(bin = g.bin().get(), "clipping index grid");
            StandardizedIndexGrid::new(g.bin(), clip(g.grid(), region))
        })
        .collect();

    let grids: Vec<&Grid> = clipped.iter().map(|g| g.grid()).collect();
    let temporal_mean = reduce::mean(&grids)?;

    Ok(Summary {
        clipped,
        temporal_mean,
    })
}
