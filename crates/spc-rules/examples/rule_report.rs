//! Run-rule evaluation on synthetic process data
//!
//! Run with: RUST_LOG=debug cargo run -p spc-rules --example rule_report

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use spc_rules::{AlternationReference, Rule, RuleSet, RuleSetConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Run Rule Examples ===\n");

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let noise = Normal::new(10.0, 1.0)?;

    // Example 1: stable process with a single spike
    println!("1. Single outlier");
    let mut data1: Vec<f64> = (0..60).map(|_| noise.sample(&mut rng)).collect();
    data1[42] = 16.0;
    let report1 = RuleSet::default().evaluate(&data1)?;
    println!("{report1}");

    // Example 2: slow upward drift after a stable period
    println!("2. Drift");
    let data2: Vec<f64> = (0..60)
        .map(|i| {
            let drift = if i < 40 { 0.0 } else { (i - 40) as f64 * 0.35 };
            noise.sample(&mut rng) * 0.2 + 8.0 + drift
        })
        .collect();
    let trend_only = RuleSet::new(RuleSetConfig::new().with_rules([Rule::Trend, Rule::ZoneC]))?;
    let report2 = trend_only.evaluate(&data2)?;
    for violation in report2.violations() {
        println!("  {violation}");
    }

    // Example 3: operator over-adjusting around a nominal of 10
    println!("\n3. Over-control");
    let data3: Vec<f64> = (0..30)
        .map(|i| if i % 2 == 0 { 9.2 } else { 10.8 })
        .collect();
    for reference in [AlternationReference::Center, AlternationReference::Zero] {
        let config = RuleSetConfig::new()
            .with_rules([Rule::Overcontrol])
            .with_alternation_reference(reference);
        let report = RuleSet::new(config)?.evaluate(&data3)?;
        println!(
            "  {:?} reference: {} flagged point(s)",
            reference,
            report.flagged_indices().len()
        );
    }

    // Example 4: report as JSON for downstream tooling
    println!("\n4. JSON");
    println!("{}", serde_json::to_string_pretty(&report1.violations_for(Rule::BeyondLimits))?);

    Ok(())
}
