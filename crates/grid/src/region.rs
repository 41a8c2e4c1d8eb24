//! Region of interest: an immutable polygon boundary used for clipping.

use crate::error::GridError;
use crate::grid::Grid;

/// A simple polygon in map coordinates. Vertices are taken in order and the
/// ring is closed implicitly (last vertex connects back to the first).
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    vertices: Vec<(f64, f64)>,
}

impl Region {
    /// Creates a region from an ordered vertex ring.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DegenerateRegion`] for fewer than three
    /// vertices.
    pub fn new(vertices: Vec<(f64, f64)>) -> Result<Self, GridError> {
        if vertices.len() < 3 {
            return Err(GridError::DegenerateRegion { n: vertices.len() });
        }
        Ok(Self { vertices })
    }

    /// Axis-aligned rectangle spanning (`x0`, `y0`) to (`x1`, `y1`).
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            vertices: vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)],
        }
    }

    /// The vertex ring.
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    /// Even-odd (ray casting) point-in-polygon test.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = self.vertices[i];
            let (xj, yj) = self.vertices[j];
            if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// Clips a grid to a region: pixels whose centers fall outside the boundary
/// become no-data. The shape and extent are unchanged.
pub fn clip(grid: &Grid, region: &Region) -> Grid {
    let extent = grid.extent();
    let mut out = grid.clone();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let (x, y) = extent.pixel_center(row, col);
            if !region.contains(x, y) {
                out.set(row, col, f64::NAN);
            }
        }
    }
    out
}
