//! Spatial extent: maps pixel indices to coordinates.

use crate::error::GridError;

/// Spatial anchoring for a grid: origin of the top-left pixel corner and a
/// square cell size in map units.
///
/// Two grids may only participate in the same arithmetic or reduction
/// operation if their extents are identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    x0: f64,
    y0: f64,
    cell: f64,
}

impl Extent {
    /// Creates an extent with the given origin and cell size.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCellSize`] if `cell` is zero, negative,
    /// or not finite.
    pub fn new(x0: f64, y0: f64, cell: f64) -> Result<Self, GridError> {
        if !cell.is_finite() || cell <= 0.0 {
            return Err(GridError::InvalidCellSize { cell });
        }
        Ok(Self { x0, y0, cell })
    }

    /// Unit extent: origin (0, 0), cell size 1. Convenient for tests and
    /// purely index-based grids.
    pub fn unit() -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            cell: 1.0,
        }
    }

    /// X coordinate of the origin.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Y coordinate of the origin.
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Cell size in map units per pixel.
    pub fn cell(&self) -> f64 {
        self.cell
    }

    /// Map coordinates of the center of pixel (`row`, `col`).
    pub fn pixel_center(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.x0 + (col as f64 + 0.5) * self.cell,
            self.y0 + (row as f64 + 0.5) * self.cell,
        )
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pixel_center_unit() {
        let e = Extent::unit();
        let (x, y) = e.pixel_center(0, 0);
        assert_relative_eq!(x, 0.5);
        assert_relative_eq!(y, 0.5);
    }

    #[test]
    fn pixel_center_offset() {
        let e = Extent::new(100.0, 200.0, 250.0).unwrap();
        let (x, y) = e.pixel_center(1, 2);
        assert_relative_eq!(x, 100.0 + 2.5 * 250.0);
        assert_relative_eq!(y, 200.0 + 1.5 * 250.0);
    }

    #[test]
    fn rejects_bad_cell_size() {
        assert!(matches!(
            Extent::new(0.0, 0.0, 0.0),
            Err(GridError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            Extent::new(0.0, 0.0, -1.0),
            Err(GridError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            Extent::new(0.0, 0.0, f64::NAN),
            Err(GridError::InvalidCellSize { .. })
        ));
    }
}
