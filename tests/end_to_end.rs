//! End-to-end checks through the facade crate

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use spc_stats::prelude::*;

/// 2001 evenly spaced points on [-3, 3]: the 0.135% / 99.865% percentiles
/// land on ±2.9919 and the median on 0.
fn symmetric_grid() -> Vec<f64> {
    (0..=2000).map(|i| -3.0 + 6.0 * i as f64 / 2000.0).collect()
}

#[test]
fn capability_of_centered_process() {
    let data = symmetric_grid();
    let indices = capability(&data, -6.0, 6.0).unwrap();

    assert_relative_eq!(indices.median, 0.0, epsilon = 1e-12);
    assert_relative_eq!(indices.upper_percentile, 2.9919, epsilon = 1e-9);
    assert_relative_eq!(indices.lower_percentile, -2.9919, epsilon = 1e-9);
    assert_relative_eq!(indices.pp, 12.0 / 5.9838, epsilon = 1e-9);
    assert_relative_eq!(indices.ppu, indices.ppl, epsilon = 1e-9);
    assert_eq!(indices.ppk, indices.ppl.min(indices.ppu));
}

#[test]
fn full_coverage_gives_textbook_indices() {
    // Percentiles at 0 and 1 are the sample extremes: Lp = -3, Up = 3, M = 0
    let data = symmetric_grid();
    let indices = ProcessCapability::new()
        .with_coverage(TailCoverage::new(0.0, 1.0).unwrap())
        .compute(&data, &SpecLimits::new(-6.0, 6.0))
        .unwrap();

    assert_relative_eq!(indices.pp, 2.0, epsilon = 1e-12);
    assert_relative_eq!(indices.ppu, 2.0, epsilon = 1e-12);
    assert_relative_eq!(indices.ppl, 2.0, epsilon = 1e-12);
    assert_relative_eq!(indices.ppk, 2.0, epsilon = 1e-12);
}

#[test]
fn in_control_process_passes_capability_and_rules() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let normal = Normal::new(100.0, 1.0).unwrap();
    let data: Vec<f64> = (0..5_000).map(|_| normal.sample(&mut rng)).collect();

    let indices = capability(&data, 94.0, 106.0).unwrap();
    assert!(indices.is_capable(1.33), "ppk = {}", indices.ppk);

    let report = RuleSet::new(RuleSetConfig::new().with_rules([Rule::Stratification, Rule::Overcontrol]))
        .unwrap()
        .evaluate(&data)
        .unwrap();
    assert!(report.limits().center() > 99.9 && report.limits().center() < 100.1);
    assert_eq!(report.sample_size(), 5_000);
}

#[test]
fn drifting_process_loses_capability_and_trips_rules() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let normal = Normal::new(0.0, 0.05).unwrap();
    let mut data: Vec<f64> = (0..100).map(|_| 10.0 + normal.sample(&mut rng)).collect();
    data.extend((0..20).map(|i| 10.5 + 0.1 * i as f64));

    let indices = capability(&data, 9.5, 10.5).unwrap();
    assert!(indices.ppu < indices.ppl);
    assert!(!indices.is_capable(1.0));

    let report = RuleSet::default().evaluate(&data).unwrap();
    let trend = report.violations_for(Rule::Trend).unwrap();
    assert!((100..120).all(|i| trend.contains(i)));
    assert!(report.violations_for(Rule::BeyondLimits).unwrap().contains(119));
    assert!(!report.is_in_control());
}

#[test]
fn errors_surface_through_the_facade() {
    assert!(matches!(capability(&[], -1.0, 1.0), Err(Error::InsufficientData { .. })));
    assert!(suggest_control_limits(&[1.0], 3.0).is_err());
    assert!(RuleSet::new(RuleSetConfig::new().with_rules([])).is_err());
}
