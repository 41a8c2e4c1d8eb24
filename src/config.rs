use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Notus configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotusConfig {
    /// Study period.
    pub period: PeriodToml,

    /// Region of interest.
    pub region: RegionToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Export settings.
    #[serde(default)]
    pub export: ExportToml,
}

/// Study period: start/end year and month, inclusive.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodToml {
    pub start_year: i32,
    pub end_year: i32,
    #[serde(default = "default_start_month")]
    pub start_month: u8,
    #[serde(default = "default_end_month")]
    pub end_month: u8,
}

fn default_start_month() -> u8 {
    1
}
fn default_end_month() -> u8 {
    12
}

/// Region of interest as an ordered polygon vertex ring in map
/// coordinates.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionToml {
    pub vertices: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    #[serde(default = "default_precip_var")]
    pub precip_var: String,
    #[serde(default = "default_pet_var")]
    pub pet_var: String,
}

fn default_precip_var() -> String {
    "precipitation".to_string()
}
fn default_pet_var() -> String {
    "pet".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportToml {
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default = "default_max_pixels")]
    pub max_pixels: u64,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportToml {
    fn default() -> Self {
        Self {
            description: default_description(),
            scale: default_scale(),
            max_pixels: default_max_pixels(),
            format: default_format(),
        }
    }
}

fn default_description() -> String {
    "SPEI".to_string()
}
fn default_scale() -> f64 {
    250.0
}
fn default_max_pixels() -> u64 {
    80_000_000_000_000
}
fn default_format() -> String {
    "json".to_string()
}
