//! Property-based tests for the run rules and control-limit estimation
//!
//! These hold for any sequence: the violation set is ordered and unique,
//! short input is never flagged, and estimated limits are centered on the
//! median with a width of 2·k·stdev.

use approx::assert_relative_eq;
use proptest::prelude::*;
use spc_core::{utils, ControlLimits};
use spc_quantile::{linear_interpolation, QuantileEstimator};
use spc_rules::{
    detector_for, suggest_control_limits, AlternationReference, PatternDetector, Rule, RuleSet,
};

fn sequence() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-5.0..5.0f64, 0..80)
}

fn limits() -> impl Strategy<Value = ControlLimits> {
    (-2.0..0.0f64, 0.0..3.0f64).prop_map(|(lower, width)| ControlLimits::new(lower, lower + width))
}

fn reference() -> impl Strategy<Value = AlternationReference> {
    prop_oneof![
        Just(AlternationReference::Center),
        Just(AlternationReference::Zero)
    ]
}

proptest! {
    #[test]
    fn prop_indices_strictly_ascending(data in sequence(), limits in limits(), reference in reference()) {
        for rule in Rule::ALL {
            let violation = detector_for(rule, reference).detect(&data, &limits);
            let indices = violation.indices();
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]), "{} produced {:?}", rule, indices);
            for point in violation.points() {
                prop_assert!(point.index < data.len());
                prop_assert_eq!(point.value.to_bits(), data[point.index].to_bits());
            }
        }
    }

    #[test]
    fn prop_short_input_is_empty(data in sequence(), limits in limits()) {
        for rule in Rule::ALL {
            let short = &data[..data.len().min(rule.window_size() - 1)];
            let violation = detector_for(rule, AlternationReference::Center).detect(short, &limits);
            prop_assert!(violation.is_empty(), "{} flagged {} points", rule, short.len());
        }
    }

    #[test]
    fn prop_beyond_limits_matches_pointwise_test(data in sequence(), limits in limits()) {
        let violation = detector_for(Rule::BeyondLimits, AlternationReference::Center).detect(&data, &limits);
        let expected: Vec<usize> = data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v > limits.upper || v < limits.lower)
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(violation.indices(), expected);
    }

    #[test]
    fn prop_flagged_points_lie_in_some_flagged_window(data in sequence(), limits in limits()) {
        // Every point a zone A violation reports belongs to a window with
        // at least two points beyond the B/A boundary.
        let zones = limits.zones();
        let violation = detector_for(Rule::ZoneA, AlternationReference::Center).detect(&data, &limits);
        for index in violation.indices() {
            let start = index.saturating_sub(2);
            let covered = (start..=index)
                .filter(|&offset| offset + 3 <= data.len())
                .any(|offset| data[offset..offset + 3].iter().filter(|&&v| zones.beyond_zone_b(v)).count() >= 2);
            prop_assert!(covered, "index {} has no flagged window", index);
        }
    }

    #[test]
    fn prop_report_union_matches_rules(data in sequence(), limits in limits()) {
        let report = RuleSet::default().evaluate_with_limits(&data, limits);
        let flagged = report.flagged_indices();
        prop_assert!(flagged.windows(2).all(|w| w[0] < w[1]));
        for violation in report.violations() {
            for index in violation.indices() {
                prop_assert!(flagged.binary_search(&index).is_ok());
            }
        }
        prop_assert_eq!(report.is_in_control(), flagged.is_empty());
    }

    #[test]
    fn prop_control_limits_width_and_center(
        data in prop::collection::vec(-1e3..1e3f64, 2..200),
        sigma_level in 0.5..6.0f64,
    ) {
        let limits = suggest_control_limits(&data, sigma_level).unwrap();
        let sd = utils::std_dev(&data).unwrap();
        let median = linear_interpolation().median(&data).unwrap();

        assert_relative_eq!(limits.width(), 2.0 * sigma_level * sd, epsilon = 1e-9, max_relative = 1e-9);
        assert_relative_eq!(limits.center(), median, epsilon = 1e-9, max_relative = 1e-9);
    }
}
