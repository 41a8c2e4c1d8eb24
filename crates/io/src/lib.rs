//! # notus-io
//!
//! File I/O for the Notus drought index pipeline: the JSON-backed
//! [`JsonSeriesProvider`] feeding monthly grids into the pipeline, grid
//! export in JSON or CSV driven by an [`ExportRequest`] (description,
//! scale, pixel ceiling, format), and the per-run diagnostics report.

mod error;
mod export;
mod read;
mod report;

pub use error::IoError;
pub use export::{export_grid, ExportFormat, ExportRequest};
pub use read::JsonSeriesProvider;
pub use report::{build_report, write_report, BinDiagnostics, DiagnosticsReport, RenderSummary};
