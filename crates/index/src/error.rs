//! Error types for the notus-index crate.

use notus_grid::GridError;
use notus_series::SeriesError;

/// Error type for all fallible operations in the notus-index crate.
///
/// Every variant aborts the pipeline run at the stage that detected it;
/// there is no retry and no partial continuation past a missing or invalid
/// composite.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndexError {
    /// Returned when a provider delivers an empty series for a variable.
    #[error("empty {variable} series: the provider returned no grids for the requested range")]
    EmptySeries {
        /// Variable whose series was empty.
        variable: &'static str,
    },

    /// Returned when a required calendar-month bin has zero contributing
    /// grids after aggregation. Propagated rather than zero-filled: a
    /// sum over an empty set would be indistinguishable from a true zero
    /// water balance.
    #[error("no {variable} grids contributed to month bin {bin}")]
    MissingBin {
        /// Variable whose composite is empty.
        variable: &'static str,
        /// The affected calendar-month bin (1..=12).
        bin: u8,
    },

    /// Returned when no composite carries a required bin tag.
    #[error("no {variable} composite tagged with month bin {bin}")]
    CompositeLookup {
        /// Variable that was searched.
        variable: &'static str,
        /// The missing bin tag (1..=12).
        bin: u8,
    },

    /// Returned when a stage receives the wrong number of per-bin grids.
    #[error("expected {expected} per-bin grids, got {got}")]
    BinCount {
        /// Expected number of grids.
        expected: usize,
        /// Number of grids received.
        got: usize,
    },

    /// Wrapped error from grid arithmetic or reductions.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Wrapped error from series construction or a provider.
    #[error(transparent)]
    Series(#[from] SeriesError),
}
