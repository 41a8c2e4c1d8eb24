//! Export of the temporal-mean index grid.
//!
//! An export is described by a request carrying a description, scale,
//! pixel ceiling, and file format. Output is portable JSON or CSV; a
//! GeoTIFF backend is an external collaborator, not part of this crate.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use notus_grid::Grid;

use crate::error::IoError;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Structured JSON document with metadata and a null-masked value
    /// array.
    Json,
    /// Plain matrix CSV, one grid row per line, empty cells for no-data.
    Csv,
}

impl ExportFormat {
    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnknownFormat`] for unrecognized names.
    pub fn parse(name: &str) -> Result<Self, IoError> {
        match name.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(IoError::UnknownFormat {
                name: other.to_string(),
            }),
        }
    }
}

/// Parameters for one export call.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    description: String,
    scale: f64,
    max_pixels: u64,
    format: ExportFormat,
}

impl ExportRequest {
    /// Creates a request with the conventional defaults: description
    /// "SPEI", scale 250 m/pixel, ceiling 8e13 pixels, JSON output.
    pub fn new() -> Self {
        Self {
            description: "SPEI".to_string(),
            scale: 250.0,
            max_pixels: 80_000_000_000_000,
            format: ExportFormat::Json,
        }
    }

    /// Sets the human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the output resolution in map units per pixel.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the pixel-count ceiling.
    pub fn with_max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = max_pixels;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// The human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The output resolution.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The pixel ceiling.
    pub fn max_pixels(&self) -> u64 {
        self.max_pixels
    }

    /// The output format.
    pub fn format(&self) -> ExportFormat {
        self.format
    }
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct GridDocument<'a> {
    description: &'a str,
    scale: f64,
    rows: usize,
    cols: usize,
    cell_size: f64,
    origin: [f64; 2],
    values: Vec<Option<f64>>,
}

/// Writes a grid to `path` according to the request.
///
/// # Errors
///
/// Fails on an invalid scale, a grid larger than the pixel ceiling, or
/// filesystem/serialization problems.
pub fn export_grid(path: &Path, grid: &Grid, request: &ExportRequest) -> Result<(), IoError> {
    if !request.scale.is_finite() || request.scale <= 0.0 {
        return Err(IoError::InvalidScale {
            scale: request.scale,
        });
    }
    let pixels = grid.len() as u64;
    if pixels > request.max_pixels {
        return Err(IoError::PixelBudgetExceeded {
            pixels,
            max: request.max_pixels,
        });
    }

    match request.format {
        ExportFormat::Json => {
            let doc = GridDocument {
                description: &request.description,
                scale: request.scale,
                rows: grid.rows(),
                cols: grid.cols(),
                cell_size: grid.extent().cell(),
                origin: [grid.extent().x0(), grid.extent().y0()],
                values: grid
                    .values()
                    .iter()
                    .map(|&v| if v.is_finite() { Some(v) } else { None })
                    .collect(),
            };
            fs::write(path, serde_json::to_string_pretty(&doc)?)?;
        }
        ExportFormat::Csv => {
            let mut out = String::new();
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    if col > 0 {
                        out.push(',');
                    }
                    let v = grid.get(row, col);
                    if v.is_finite() {
                        out.push_str(&format!("{v}"));
                    }
                }
                out.push('\n');
            }
            fs::write(path, out)?;
        }
    }

    info!(path = %path.display(), pixels, "grid exported");
    Ok(())
}
