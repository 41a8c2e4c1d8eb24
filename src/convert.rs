//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result};

use notus_grid::Region;
use notus_io::{ExportFormat, ExportRequest};
use notus_series::DateRange;

use crate::config::{ExportToml, PeriodToml, RegionToml};

/// Builds the study date range from the period section.
pub fn build_range(period: &PeriodToml) -> Result<DateRange> {
    DateRange::from_ymd(
        period.start_year,
        period.start_month,
        period.end_year,
        period.end_month,
    )
    .context("invalid [period] section")
}

/// Builds the region of interest from the region section.
pub fn build_region(region: &RegionToml) -> Result<Region> {
    let vertices: Vec<(f64, f64)> = region.vertices.iter().map(|v| (v[0], v[1])).collect();
    Region::new(vertices).context("invalid [region] section")
}

/// Builds the export request from the export section.
pub fn build_export(export: &ExportToml) -> Result<ExportRequest> {
    let format = ExportFormat::parse(&export.format).context("invalid [export].format")?;
    Ok(ExportRequest::new()
        .with_description(export.description.clone())
        .with_scale(export.scale)
        .with_max_pixels(export.max_pixels)
        .with_format(format))
}
