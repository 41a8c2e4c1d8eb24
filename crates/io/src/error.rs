//! Error types for the notus-io crate.

use notus_grid::GridError;
use notus_series::SeriesError;

/// Error type for all fallible operations in the notus-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Wrapped filesystem error.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped JSON (de)serialization error.
    #[error("JSON failure: {0}")]
    Json(#[from] serde_json::Error),

    /// Returned when a grid record's value count does not match its shape.
    #[error("grid {year}-{month:02} ({variable}): {got} values for shape {rows}x{cols}")]
    ValueCountMismatch {
        /// Variable name from the file.
        variable: String,
        /// Record year.
        year: i32,
        /// Record month.
        month: u8,
        /// Declared rows.
        rows: usize,
        /// Declared columns.
        cols: usize,
        /// Number of values actually present.
        got: usize,
    },

    /// Returned when an export format name is not recognized.
    #[error("unknown export format: {name:?} (expected \"json\" or \"csv\")")]
    UnknownFormat {
        /// The unrecognized name.
        name: String,
    },

    /// Returned when an export would exceed the configured pixel ceiling.
    #[error("export of {pixels} pixels exceeds the ceiling of {max}")]
    PixelBudgetExceeded {
        /// Pixels in the grid being exported.
        pixels: u64,
        /// Configured ceiling.
        max: u64,
    },

    /// Returned when an export scale is zero, negative, or not finite.
    #[error("invalid export scale: {scale}")]
    InvalidScale {
        /// The offending scale.
        scale: f64,
    },

    /// Wrapped error from grid construction.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Wrapped error from series construction.
    #[error(transparent)]
    Series(#[from] SeriesError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_value_count_mismatch() {
        let e = IoError::ValueCountMismatch {
            variable: "pet".to_string(),
            year: 2015,
            month: 3,
            rows: 2,
            cols: 2,
            got: 3,
        };
        assert!(e.to_string().contains("2015-03"));
        assert!(e.to_string().contains("2x2"));
        assert!(e.to_string().contains("3 values"));
    }

    #[test]
    fn display_pixel_budget() {
        let e = IoError::PixelBudgetExceeded {
            pixels: 100,
            max: 10,
        };
        assert!(e.to_string().contains("100"));
        assert!(e.to_string().contains("10"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IoError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IoError>();
    }
}
