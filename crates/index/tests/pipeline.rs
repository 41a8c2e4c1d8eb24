//! End-to-end pipeline tests over an in-memory provider.

use approx::assert_relative_eq;
use notus_grid::{Extent, Grid, Region};
use notus_index::{run_pipeline, IndexError};
use notus_series::{DateRange, InMemoryProvider, MonthStamp, Variable};

const ROWS: usize = 3;
const COLS: usize = 4;

fn region() -> Region {
    Region::rect(0.0, 0.0, COLS as f64, ROWS as f64)
}

/// Two full years of constant monthly values for both variables.
fn constant_provider(precip: f64, pet: f64) -> InMemoryProvider {
    let mut p = InMemoryProvider::new();
    for year in [2015, 2016] {
        for month in 1..=12 {
            let stamp = MonthStamp::new(year, month).unwrap();
            p.insert(
                Variable::Precipitation,
                stamp,
                Grid::constant(ROWS, COLS, Extent::unit(), precip).unwrap(),
            );
            p.insert(
                Variable::Pet,
                stamp,
                Grid::constant(ROWS, COLS, Extent::unit(), pet).unwrap(),
            );
        }
    }
    p
}

/// One year where the water balance for month m is 10 * m at every pixel.
fn arithmetic_provider() -> InMemoryProvider {
    let mut p = InMemoryProvider::new();
    for month in 1..=12u8 {
        let stamp = MonthStamp::new(2015, month).unwrap();
        p.insert(
            Variable::Precipitation,
            stamp,
            Grid::constant(ROWS, COLS, Extent::unit(), f64::from(month) * 10.0).unwrap(),
        );
        p.insert(
            Variable::Pet,
            stamp,
            Grid::constant(ROWS, COLS, Extent::unit(), 0.0).unwrap(),
        );
    }
    p
}

#[test]
fn constant_scenario_ends_all_no_data() {
    // Precip 100, PET 60, 2 years: composites 200/120, balance 80
    // everywhere, stdDev 0, so every index pixel must be no-data.
    let provider = constant_provider(100.0, 60.0);
    let range = DateRange::from_ymd(2015, 1, 2016, 12).unwrap();
    let output = run_pipeline(&provider, &region(), &range).unwrap();

    for c in output.precip_composites() {
        assert_eq!(c.source_count(), 2);
        assert_relative_eq!(c.grid().get(0, 0), 200.0);
    }
    for c in output.pet_composites() {
        assert_relative_eq!(c.grid().get(0, 0), 120.0);
    }
    for wb in output.water_balance() {
        assert_relative_eq!(wb.grid().get(2, 3), 80.0);
    }

    assert_relative_eq!(output.index().stats().mean.get(0, 0), 80.0);
    assert_relative_eq!(output.index().stats().std_dev.get(0, 0), 0.0);
    assert_eq!(output.index().degenerate_pixels(), ROWS * COLS);

    for g in output.index().grids() {
        assert_eq!(g.grid().valid_count(), 0);
    }
    assert_eq!(output.summary().temporal_mean().valid_count(), 0);
}

#[test]
fn arithmetic_scenario_matches_closed_form() {
    let provider = arithmetic_provider();
    let range = DateRange::from_ymd(2015, 1, 2015, 12).unwrap();
    let output = run_pipeline(&provider, &region(), &range).unwrap();

    let sd = 1300.0_f64.sqrt();
    let grids = output.index().grids();
    assert_eq!(grids.len(), 12);
    assert_relative_eq!(grids[0].grid().get(0, 0), (10.0 - 65.0) / sd, epsilon = 1e-10);
    assert_relative_eq!(
        grids[11].grid().get(ROWS - 1, COLS - 1),
        (120.0 - 65.0) / sd,
        epsilon = 1e-10
    );

    // Temporal mean of symmetric z-scores is zero.
    assert_relative_eq!(
        output.summary().temporal_mean().get(1, 1),
        0.0,
        epsilon = 1e-10
    );
}

#[test]
fn pipeline_is_deterministic() {
    let provider = arithmetic_provider();
    let range = DateRange::from_ymd(2015, 1, 2015, 12).unwrap();
    let a = run_pipeline(&provider, &region(), &range).unwrap();
    let b = run_pipeline(&provider, &region(), &range).unwrap();

    for (x, y) in a
        .precip_composites()
        .iter()
        .zip(b.precip_composites().iter())
    {
        assert!(x.grid().bit_eq(y.grid()));
    }
    for (x, y) in a.water_balance().iter().zip(b.water_balance().iter()) {
        assert!(x.grid().bit_eq(y.grid()));
    }
    for (x, y) in a.index().grids().iter().zip(b.index().grids().iter()) {
        assert!(x.grid().bit_eq(y.grid()));
    }
    assert!(a
        .summary()
        .temporal_mean()
        .bit_eq(b.summary().temporal_mean()));
}

#[test]
fn partial_year_coverage_fails_at_balance_stage() {
    // Provider only has January..=March: bins 4..=12 aggregate empty and
    // the water balance stage must refuse to continue.
    let mut provider = InMemoryProvider::new();
    for month in 1..=3u8 {
        let stamp = MonthStamp::new(2015, month).unwrap();
        provider.insert(
            Variable::Precipitation,
            stamp,
            Grid::constant(ROWS, COLS, Extent::unit(), 10.0).unwrap(),
        );
        provider.insert(
            Variable::Pet,
            stamp,
            Grid::constant(ROWS, COLS, Extent::unit(), 5.0).unwrap(),
        );
    }
    let range = DateRange::from_ymd(2015, 1, 2015, 12).unwrap();
    let result = run_pipeline(&provider, &region(), &range);

    assert!(matches!(
        result,
        Err(IndexError::MissingBin {
            variable: "precipitation",
            bin: 4,
        })
    ));
}

#[test]
fn missing_variable_fails_at_aggregation() {
    // PET never inserted.
    let mut provider = InMemoryProvider::new();
    for month in 1..=12u8 {
        provider.insert(
            Variable::Precipitation,
            MonthStamp::new(2015, month).unwrap(),
            Grid::constant(ROWS, COLS, Extent::unit(), 10.0).unwrap(),
        );
    }
    let range = DateRange::from_ymd(2015, 1, 2015, 12).unwrap();
    let result = run_pipeline(&provider, &region(), &range);

    assert!(matches!(
        result,
        Err(IndexError::EmptySeries { variable: "pet" })
    ));
}

#[test]
fn clip_restricts_summary_to_region() {
    let provider = arithmetic_provider();
    let range = DateRange::from_ymd(2015, 1, 2015, 12).unwrap();
    // Region covering only the leftmost column of pixels.
    let narrow = Region::rect(0.0, 0.0, 1.0, ROWS as f64);
    let output = run_pipeline(&provider, &narrow, &range).unwrap();

    let mean = output.summary().temporal_mean();
    for row in 0..ROWS {
        assert!(!mean.is_no_data(row, 0));
        for col in 1..COLS {
            assert!(mean.is_no_data(row, col));
        }
    }
}
