//! File-backed grid series provider.
//!
//! The on-disk format is a single JSON document holding every monthly grid
//! for both variables:
//!
//! ```json
//! {
//!   "cell_size": 250.0,
//!   "origin": [0.0, 0.0],
//!   "grids": [
//!     { "variable": "precipitation", "year": 2015, "month": 1,
//!       "rows": 2, "cols": 2, "values": [1.0, null, 3.0, 4.0] }
//!   ]
//! }
//! ```
//!
//! `null` values are no-data pixels. Records whose variable name matches
//! neither configured name are skipped with a log line, so files may carry
//! extra bands.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use notus_grid::{Extent, Grid, Region};
use notus_series::{
    DateRange, GridSeries, GridSeriesProvider, MonthStamp, SeriesError, Variable,
};

use crate::error::IoError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeriesFile {
    cell_size: f64,
    #[serde(default)]
    origin: [f64; 2],
    grids: Vec<GridRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridRecord {
    variable: String,
    year: i32,
    month: u8,
    rows: usize,
    cols: usize,
    values: Vec<Option<f64>>,
}

/// A [`GridSeriesProvider`] backed by one JSON series file, fully parsed
/// at open time so that fetches are pure in-memory filters.
#[derive(Debug)]
pub struct JsonSeriesProvider {
    entries: BTreeMap<(Variable, MonthStamp), Grid>,
}

impl JsonSeriesProvider {
    /// Opens and parses a series file.
    ///
    /// `precip_var` and `pet_var` are the variable names to look for in
    /// the file (the dataset band names, e.g. `"precipitation"` and
    /// `"pet"`).
    ///
    /// # Errors
    ///
    /// Fails on unreadable files, malformed JSON, invalid months or cell
    /// sizes, and records whose value count contradicts their shape.
    pub fn open(path: &Path, precip_var: &str, pet_var: &str) -> Result<Self, IoError> {
        let text = fs::read_to_string(path)?;
        let file: SeriesFile = serde_json::from_str(&text)?;
        let extent = Extent::new(file.origin[0], file.origin[1], file.cell_size)?;

        let mut entries = BTreeMap::new();
        let mut skipped = 0usize;
        for record in file.grids {
            let variable = if record.variable == precip_var {
                Variable::Precipitation
            } else if record.variable == pet_var {
                Variable::Pet
            } else {
                debug!(variable = %record.variable, "skipping unknown variable");
                skipped += 1;
                continue;
            };

            if record.values.len() != record.rows * record.cols {
                return Err(IoError::ValueCountMismatch {
                    variable: record.variable,
                    year: record.year,
                    month: record.month,
                    rows: record.rows,
                    cols: record.cols,
                    got: record.values.len(),
                });
            }

            let stamp = MonthStamp::new(record.year, record.month)?;
            let data: Vec<f64> = record
                .values
                .into_iter()
                .map(|v| v.unwrap_or(f64::NAN))
                .collect();
            let grid = Grid::from_vec(record.rows, record.cols, extent, data)?;
            entries.insert((variable, stamp), grid);
        }

        info!(
            path = %path.display(),
            grids = entries.len(),
            skipped,
            "series file loaded"
        );
        Ok(Self { entries })
    }

    /// Number of loaded grids across both variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the file contained no usable grids.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GridSeriesProvider for JsonSeriesProvider {
    fn fetch_series(
        &self,
        variable: Variable,
        _region: &Region,
        range: &DateRange,
    ) -> Result<GridSeries, SeriesError> {
        // The file is expected to be pre-clipped to the study region;
        // only temporal filtering happens here.
        let entries: Vec<(MonthStamp, Grid)> = self
            .entries
            .iter()
            .filter(|((v, stamp), _)| *v == variable && range.contains(*stamp))
            .map(|((_, stamp), grid)| (*stamp, grid.clone()))
            .collect();
        GridSeries::new(variable, entries)
    }
}
