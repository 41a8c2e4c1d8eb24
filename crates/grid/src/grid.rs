//! Single-band raster grid with a per-pixel no-data marker.

use crate::error::GridError;
use crate::extent::Extent;

/// Returns true if `v` is the no-data marker (any non-finite value).
pub fn is_no_data(v: f64) -> bool {
    !v.is_finite()
}

/// A single-band 2-D raster of `f64` values in row-major order.
///
/// No-data pixels are stored as NaN; any non-finite value is treated as
/// no-data by every operation in this crate. A grid carries an [`Extent`]
/// anchoring pixel indices to map coordinates.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    extent: Extent,
    data: Vec<f64>,
}

impl Grid {
    /// Builds a grid from a row-major data vector.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyShape`] for zero dimensions and
    /// [`GridError::LengthMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(
        rows: usize,
        cols: usize,
        extent: Extent,
        data: Vec<f64>,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyShape { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(GridError::LengthMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            extent,
            data,
        })
    }

    /// Builds a grid with every pixel set to `value`.
    pub fn constant(
        rows: usize,
        cols: usize,
        extent: Extent,
        value: f64,
    ) -> Result<Self, GridError> {
        Self::from_vec(rows, cols, extent, vec![value; rows * cols])
    }

    /// Builds a grid with every pixel set to no-data.
    pub fn no_data(rows: usize, cols: usize, extent: Extent) -> Result<Self, GridError> {
        Self::constant(rows, cols, extent, f64::NAN)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total pixel count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the grid holds no pixels. A constructed grid always has at
    /// least one.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Spatial extent.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Value at (`row`, `col`). NaN means no-data.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Sets the value at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// True if the pixel at (`row`, `col`) is no-data.
    pub fn is_no_data(&self, row: usize, col: usize) -> bool {
        is_no_data(self.get(row, col))
    }

    /// Row-major view of all pixel values.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Number of pixels holding a finite value.
    pub fn valid_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_finite()).count()
    }

    /// Bitwise equality: same shape, same extent, and every pixel has the
    /// same bit pattern (so no-data compares equal to no-data). This is the
    /// comparison determinism guarantees are stated in.
    pub fn bit_eq(&self, other: &Grid) -> bool {
        self.shape() == other.shape()
            && self.extent == other.extent
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }

    /// Checks that `other` shares this grid's shape and extent.
    pub(crate) fn same_domain(&self, other: &Grid) -> Result<(), GridError> {
        if self.shape() != other.shape() {
            return Err(GridError::ShapeMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: other.rows,
                cols: other.cols,
            });
        }
        if self.extent != other.extent {
            return Err(GridError::ExtentMismatch);
        }
        Ok(())
    }
}
