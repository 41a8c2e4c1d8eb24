//! # notus-index
//!
//! The SPEI-like drought index pipeline for the Notus toolkit.
//!
//! # Pipeline Order
//!
//! 1. **Aggregation**: bin a monthly grid series by calendar month and
//!    sum each bin into one composite (`aggregate_monthly`)
//! 2. **Water Balance**: precipitation composite minus PET composite per
//!    bin, matched by tag (`water_balance`)
//! 3. **Standardization**: cross-bin per-pixel mean/stdDev applied to
//!    every bin (`standardize`)
//! 4. **Summary**: region clip and temporal mean (`summarize`)
//!
//! `run_pipeline` wires the stages end to end behind a
//! [`notus_series::GridSeriesProvider`]. Severity classification of the
//! resulting index values lives in [`SeverityClass`].

mod aggregate;
mod balance;
mod error;
mod pipeline;
mod severity;
mod standardize;
mod summary;

pub use aggregate::{aggregate_monthly, MonthlyComposite};
pub use balance::{water_balance, WaterBalanceGrid};
pub use error::IndexError;
pub use pipeline::{run_pipeline, PipelineOutput};
pub use severity::{SeverityClass, DEFAULT_RENDER_RANGE};
pub use standardize::{standardize, StandardizeResult, StandardizedIndexGrid};
pub use summary::{summarize, Summary};

// Re-export the statistics grid pair so callers need not depend on
// notus-grid directly for it.
pub use notus_grid::CrossStats;
