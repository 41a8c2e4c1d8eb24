//! Elementwise arithmetic between grids sharing one spatial domain.
//!
//! No-data handling: if either operand at a pixel is no-data, the result at
//! that pixel is no-data. Division by zero or by a non-finite denominator
//! also yields no-data, never an arbitrary finite value or a signed
//! infinity that could leak into downstream reductions.

use crate::error::GridError;
use crate::grid::{is_no_data, Grid};

/// Elementwise `a - b`.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] or [`GridError::ExtentMismatch`] if
/// the grids do not share a spatial domain.
pub fn subtract(a: &Grid, b: &Grid) -> Result<Grid, GridError> {
    zip_with(a, b, |x, y| x - y)
}

/// Elementwise `a / b`, with zero and non-finite denominators mapped to
/// no-data.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] or [`GridError::ExtentMismatch`] if
/// the grids do not share a spatial domain.
pub fn divide(a: &Grid, b: &Grid) -> Result<Grid, GridError> {
    zip_with(a, b, |x, y| if y == 0.0 { f64::NAN } else { x / y })
}

/// Combines two grids pixelwise with `f`, propagating no-data from either
/// operand.
fn zip_with(a: &Grid, b: &Grid, f: impl Fn(f64, f64) -> f64) -> Result<Grid, GridError> {
    a.same_domain(b)?;
    let data: Vec<f64> = a
        .values()
        .iter()
        .zip(b.values().iter())
        .map(|(&x, &y)| {
            if is_no_data(x) || is_no_data(y) {
                f64::NAN
            } else {
                f(x, y)
            }
        })
        .collect();
    Grid::from_vec(a.rows(), a.cols(), a.extent(), data)
}
