//! Diagnostics report for one pipeline run.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use notus_grid::Grid;
use notus_index::{PipelineOutput, SeverityClass, DEFAULT_RENDER_RANGE};
use notus_series::DateRange;

use crate::error::IoError;

/// Top-level diagnostics output, serialized as JSON next to the exported
/// grid.
#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    /// Covered period, e.g. `"2015-01..2024-12"`.
    pub period: String,
    /// Rendering parameters for downstream visualization.
    pub render: RenderSummary,
    /// Per-bin statistics in bin order 1..12.
    pub bins: Vec<BinDiagnostics>,
    /// Pixels whose cross-bin stdDev was zero or undefined.
    pub degenerate_pixels: usize,
    /// Pixels of the temporal mean holding a finite index value.
    pub temporal_mean_valid_pixels: usize,
    /// Severity class histogram over the temporal mean.
    pub severity: BTreeMap<&'static str, usize>,
}

/// Value range and palette for map rendering.
#[derive(Debug, Serialize)]
pub struct RenderSummary {
    pub min: f64,
    pub max: f64,
    pub palette: Vec<&'static str>,
}

/// Statistics for one calendar-month bin.
#[derive(Debug, Serialize)]
pub struct BinDiagnostics {
    /// Calendar month 1..=12.
    pub bin: u8,
    /// Source grids summed into the precipitation composite.
    pub precip_sources: usize,
    /// Source grids summed into the PET composite.
    pub pet_sources: usize,
    /// Mean water balance over finite pixels, if any.
    pub balance_mean: Option<f64>,
    /// Sample standard deviation of the water balance over finite pixels.
    pub balance_sd: Option<f64>,
    /// No-data pixels in the clipped index grid for this bin.
    pub index_no_data: usize,
}

/// Assembles the diagnostics report from a pipeline run.
pub fn build_report(output: &PipelineOutput, range: &DateRange) -> DiagnosticsReport {
    let bins = output
        .precip_composites()
        .iter()
        .zip(output.pet_composites())
        .zip(output.water_balance())
        .zip(output.summary().clipped())
        .map(|(((p, e), wb), idx)| BinDiagnostics {
            bin: p.bin().get(),
            precip_sources: p.source_count(),
            pet_sources: e.source_count(),
            balance_mean: finite_mean(wb.grid()),
            balance_sd: finite_sd(wb.grid()),
            index_no_data: idx.grid().len() - idx.grid().valid_count(),
        })
        .collect();

    let mean_grid = output.summary().temporal_mean();
    let mut severity: BTreeMap<&'static str, usize> = BTreeMap::new();
    for &v in mean_grid.values() {
        if let Some(class) = SeverityClass::classify(v) {
            *severity.entry(class.name()).or_insert(0) += 1;
        }
    }

    DiagnosticsReport {
        period: format!("{}..{}", range.start(), range.end()),
        render: RenderSummary {
            min: DEFAULT_RENDER_RANGE.0,
            max: DEFAULT_RENDER_RANGE.1,
            palette: SeverityClass::ALL.iter().map(|c| c.color()).collect(),
        },
        bins,
        degenerate_pixels: output.index().degenerate_pixels(),
        temporal_mean_valid_pixels: mean_grid.valid_count(),
        severity,
    }
}

/// Writes the report as pretty-printed JSON.
pub fn write_report(path: &Path, report: &DiagnosticsReport) -> Result<(), IoError> {
    fs::write(path, serde_json::to_string_pretty(report)?)?;
    info!(path = %path.display(), "diagnostics written");
    Ok(())
}

/// Mean over finite pixels; `None` for an all-no-data grid.
fn finite_mean(grid: &Grid) -> Option<f64> {
    let finite: Vec<f64> = grid.values().iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    Some(finite.iter().sum::<f64>() / finite.len() as f64)
}

/// Sample standard deviation over finite pixels; `None` below two pixels.
fn finite_sd(grid: &Grid) -> Option<f64> {
    let finite: Vec<f64> = grid.values().iter().copied().filter(|v| v.is_finite()).collect();
    if finite.len() < 2 {
        return None;
    }
    let n = finite.len() as f64;
    let mean = finite.iter().sum::<f64>() / n;
    let ss = finite.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
    Some((ss / (n - 1.0)).sqrt())
}
