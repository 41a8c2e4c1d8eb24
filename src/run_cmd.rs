use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use notus_index::run_pipeline;
use notus_io::{build_report, export_grid, write_report, JsonSeriesProvider};

use crate::cli::RunArgs;
use crate::config::NotusConfig;
use crate::convert;

/// Run the full index pipeline from a TOML configuration.
pub fn run(args: RunArgs) -> Result<()> {
    // Step 1: Load configuration
    let text = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config: {}", args.config.display()))?;
    let config: NotusConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config: {}", args.config.display()))?;

    // Step 2: Resolve paths (CLI overrides config)
    let input = args
        .input
        .or_else(|| config.io.input.clone())
        .context("no input path: set [io].input in config or use --input")?;
    let output = args
        .output
        .or_else(|| config.io.output.clone())
        .context("no output path: set [io].output in config or use --output")?;

    // Step 3: Build API types from TOML
    let range = convert::build_range(&config.period)?;
    let region = convert::build_region(&config.region)?;
    let request = convert::build_export(&config.export)?;

    // Step 4: Open the series provider
    info!(path = %input.display(), "opening series file");
    let provider = JsonSeriesProvider::open(&input, &config.io.precip_var, &config.io.pet_var)
        .with_context(|| format!("failed to open series file: {}", input.display()))?;

    // Step 5: Run the pipeline
    let result = run_pipeline(&provider, &region, &range).context("pipeline failed")?;

    // Step 6: Export the temporal mean
    export_grid(&output, result.summary().temporal_mean(), &request)
        .with_context(|| format!("failed to export grid: {}", output.display()))?;
    info!(path = %output.display(), "temporal mean exported");

    // Step 7: Diagnostics (default path next to the output grid)
    let report_path = config
        .io
        .report
        .clone()
        .unwrap_or_else(|| output.with_extension("diagnostics.json"));
    let report = build_report(&result, &range);
    write_report(&report_path, &report)
        .with_context(|| format!("failed to write diagnostics: {}", report_path.display()))?;

    Ok(())
}
