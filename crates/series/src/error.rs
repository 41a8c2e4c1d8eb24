//! Error types for the notus-series crate.

/// Error type for all fallible operations in the notus-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a date range ends before it starts.
    #[error("invalid date range: {start_year}-{start_month:02} is after {end_year}-{end_month:02}")]
    InvalidRange {
        /// Start year.
        start_year: i32,
        /// Start month.
        start_month: u8,
        /// End year.
        end_year: i32,
        /// End month.
        end_month: u8,
    },

    /// Returned when a series member grid does not share the domain of the
    /// first member.
    #[error("series grid at position {index} does not share the series spatial domain")]
    DomainMismatch {
        /// Position of the offending (timestamp, grid) pair.
        index: usize,
    },

    /// Returned when a provider cannot deliver a requested series.
    #[error("provider failed for {variable}: {message}")]
    Provider {
        /// Variable that was requested.
        variable: String,
        /// Backend description of the failure.
        message: String,
    },
}
