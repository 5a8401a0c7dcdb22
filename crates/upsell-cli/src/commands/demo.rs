use anyhow::Context;
use upsell_config::UpsellConfig;
use upsell_core::{OwnedVehicle, Policy, UpsellReport};
use upsell_finder::{FinderOptions, FixedOwnershipLookup, UpsellFinder};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DemoArgs;
use crate::output::output;

/// Handle `upsell demo`.
pub async fn handle(
    args: &DemoArgs,
    config: &UpsellConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let report = run(args, config).await?;
    tracing::info!(found = report.opportunities.len(), "upsell opportunities found");
    if args.stats {
        output(&report, flags.format)
    } else {
        output(&report.opportunities, flags.format)
    }
}

async fn run(args: &DemoArgs, config: &UpsellConfig) -> anyhow::Result<UpsellReport> {
    let finder = UpsellFinder::with_options(
        FixedOwnershipLookup::new(sample_ownerships()),
        FinderOptions::from(&config.finder),
    );
    finder
        .find_with_report(&sample_policies(args.policies))
        .await
        .context("demo: upsell search failed")
}

/// `P{i}`/`V{i}` policies with the first two replaced by the covered pairs
/// `(P1, V8)` and `(P2, V6)`.
fn sample_policies(count: usize) -> Vec<Policy> {
    let mut policies: Vec<Policy> = (0..count)
        .map(|i| Policy::new(format!("P{i}"), format!("V{i}")))
        .collect();
    for (slot, covered) in policies
        .iter_mut()
        .zip([Policy::new("P1", "V8"), Policy::new("P2", "V6")])
    {
        *slot = covered;
    }
    policies
}

fn sample_ownerships() -> Vec<OwnedVehicle> {
    vec![
        OwnedVehicle::new("P1", "V8"),
        OwnedVehicle::new("P1", "V3"),
        OwnedVehicle::new("P2", "V6"),
    ]
}
