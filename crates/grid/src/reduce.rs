//! Pixelwise reductions across a collection of grids.
//!
//! Every reducer works per pixel over the values contributed by each input
//! grid, skipping no-data contributors. A pixel with no finite contributor
//! at all reduces to no-data.

use crate::error::GridError;
use crate::extent::Extent;
use crate::grid::Grid;

/// Pixelwise mean and sample standard deviation over a set of grids.
#[derive(Debug, Clone)]
pub struct CrossStats {
    /// Pixelwise mean over finite contributors.
    pub mean: Grid,
    /// Pixelwise sample (N-1) standard deviation over finite contributors.
    /// No-data where fewer than two finite contributors exist.
    pub std_dev: Grid,
}

/// Pixelwise sum. Skips no-data contributors; all-no-data pixels stay
/// no-data rather than becoming a spurious zero.
pub fn sum(grids: &[&Grid]) -> Result<Grid, GridError> {
    fold(grids, |values| {
        if values.is_empty() {
            f64::NAN
        } else {
            values.iter().sum()
        }
    })
}

/// Pixelwise mean over finite contributors; no-data where none exist.
pub fn mean(grids: &[&Grid]) -> Result<Grid, GridError> {
    fold(grids, |values| {
        if values.is_empty() {
            f64::NAN
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    })
}

/// Pixelwise mean and sample standard deviation computed in one pass over
/// the input set.
///
/// The standard deviation uses the sample (N-1) convention, matching R's
/// `sd()`. Pixels with fewer than two finite contributors get a no-data
/// standard deviation; pixels with no finite contributor get no-data for
/// both statistics.
pub fn cross_stats(grids: &[&Grid]) -> Result<CrossStats, GridError> {
    let (rows, cols, extent) = common_domain(grids)?;
    let n = rows * cols;

    let mut mean_data = Vec::with_capacity(n);
    let mut sd_data = Vec::with_capacity(n);

    let mut scratch = Vec::with_capacity(grids.len());
    for i in 0..n {
        scratch.clear();
        scratch.extend(grids.iter().map(|g| g.values()[i]).filter(|v| v.is_finite()));

        match scratch.len() {
            0 => {
                mean_data.push(f64::NAN);
                sd_data.push(f64::NAN);
            }
            1 => {
                mean_data.push(scratch[0]);
                sd_data.push(f64::NAN);
            }
            k => {
                let kf = k as f64;
                let m = scratch.iter().sum::<f64>() / kf;
                let ss = scratch.iter().map(|&v| (v - m) * (v - m)).sum::<f64>();
                mean_data.push(m);
                sd_data.push((ss / (kf - 1.0)).sqrt());
            }
        }
    }

    Ok(CrossStats {
        mean: Grid::from_vec(rows, cols, extent, mean_data)?,
        std_dev: Grid::from_vec(rows, cols, extent, sd_data)?,
    })
}

/// Applies `f` to the finite contributors at each pixel.
fn fold(grids: &[&Grid], f: impl Fn(&[f64]) -> f64) -> Result<Grid, GridError> {
    let (rows, cols, extent) = common_domain(grids)?;
    let n = rows * cols;

    let mut data = Vec::with_capacity(n);
    let mut scratch = Vec::with_capacity(grids.len());
    for i in 0..n {
        scratch.clear();
        scratch.extend(grids.iter().map(|g| g.values()[i]).filter(|v| v.is_finite()));
        data.push(f(&scratch));
    }

    Grid::from_vec(rows, cols, extent, data)
}

/// Validates that all grids share one domain and returns it.
fn common_domain(grids: &[&Grid]) -> Result<(usize, usize, Extent), GridError> {
    let first = grids.first().ok_or(GridError::EmptyInput)?;
    for g in &grids[1..] {
        first.same_domain(g)?;
    }
    Ok((first.rows(), first.cols(), first.extent()))
}
