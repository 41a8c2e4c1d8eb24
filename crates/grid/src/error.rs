//! Error types for the notus-grid crate.

/// Error type for all fallible operations in the notus-grid crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when grid dimensions are zero.
    #[error("grid dimensions must be non-zero (got {rows}x{cols})")]
    EmptyShape {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },

    /// Returned when a data vector does not match the requested shape.
    #[error("data length {len} does not match shape {rows}x{cols}")]
    LengthMismatch {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Length of the supplied data vector.
        len: usize,
    },

    /// Returned when two grids in one operation have different shapes.
    #[error("shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    ShapeMismatch {
        /// Expected number of rows.
        expected_rows: usize,
        /// Expected number of columns.
        expected_cols: usize,
        /// Actual number of rows.
        rows: usize,
        /// Actual number of columns.
        cols: usize,
    },

    /// Returned when two grids in one operation have different extents.
    #[error("extent mismatch: grids in one operation must share a spatial domain")]
    ExtentMismatch,

    /// Returned when a cell size is zero, negative, or not finite.
    #[error("invalid cell size: {cell}")]
    InvalidCellSize {
        /// The offending cell size.
        cell: f64,
    },

    /// Returned when a reduction receives no grids.
    #[error("reduction over an empty set of grids")]
    EmptyInput,

    /// Returned when a region polygon has fewer than three vertices.
    #[error("region must have at least 3 vertices (got {n})")]
    DegenerateRegion {
        /// Number of vertices supplied.
        n: usize,
    },
}
