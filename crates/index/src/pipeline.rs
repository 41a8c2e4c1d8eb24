//! End-to-end pipeline: provider -> aggregation -> water balance ->
//! standardization -> summary.
//!
//! The chain is strictly linear and stateless between runs. A run either
//! completes all stages or fails at the first stage whose precondition is
//! unmet; reruns over identical input produce bit-identical grids.

use tracing::info;

use notus_grid::Region;
use notus_series::{DateRange, GridSeriesProvider, Variable};

use crate::aggregate::{aggregate_monthly, MonthlyComposite};
use crate::balance::{water_balance, WaterBalanceGrid};
use crate::error::IndexError;
use crate::standardize::{standardize, StandardizeResult};
use crate::summary::{summarize, Summary};

/// Every intermediate and final product of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    precip_composites: Vec<MonthlyComposite>,
    pet_composites: Vec<MonthlyComposite>,
    water_balance: Vec<WaterBalanceGrid>,
    index: StandardizeResult,
    summary: Summary,
}

impl PipelineOutput {
    /// The 12 precipitation composites in bin order.
    pub fn precip_composites(&self) -> &[MonthlyComposite] {
        &self.precip_composites
    }

    /// The 12 PET composites in bin order.
    pub fn pet_composites(&self) -> &[MonthlyComposite] {
        &self.pet_composites
    }

    /// The 12 water balance grids in bin order.
    pub fn water_balance(&self) -> &[WaterBalanceGrid] {
        &self.water_balance
    }

    /// The standardization result: 12 index grids plus the shared
    /// cross-bin statistics.
    pub fn index(&self) -> &StandardizeResult {
        &self.index
    }

    /// The clipped index grids and temporal mean.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

/// Runs the full drought index pipeline for one region and date range.
///
/// # Errors
///
/// Propagates the first stage failure: empty series, missing bins, failed
/// composite lookups, or grid-domain violations. Degenerate standard
/// deviations are not failures; they surface as no-data pixels.
pub fn run_pipeline(
    provider: &dyn GridSeriesProvider,
    region: &Region,
    range: &DateRange,
) -> Result<PipelineOutput, IndexError> {
    info!(
        start = %range.start(),
        end = %range.end(),
        months = range.n_months(),
        "fetching input series"
    );
    let precip_series = provider.fetch_series(Variable::Precipitation, region, range)?;
    let pet_series = provider.fetch_series(Variable::Pet, region, range)?;
    info!(
        precip_grids = precip_series.len(),
        pet_grids = pet_series.len(),
        "input series loaded"
    );

    let precip_composites = aggregate_monthly(&precip_series)?;
    let pet_composites = aggregate_monthly(&pet_series)?;
    info!("monthly composites aggregated");

    let balance = water_balance(&precip_composites, &pet_composites)?;
    info!("water balance computed");

    let index = standardize(&balance)?;
    info!(
        degenerate_pixels = index.degenerate_pixels(),
        "standardization complete"
    );

    let summary = summarize(index.grids(), region)?;
    info!(
        valid_pixels = summary.temporal_mean().valid_count(),
        "summary produced"
    );

    Ok(PipelineOutput {
        precip_composites,
        pet_composites,
        water_balance: balance,
        index,
        summary,
    })
}
