use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use upsell_config::UpsellConfig;
use upsell_core::{OwnedVehicle, Policy, UpsellReport};
use upsell_finder::{FinderOptions, InMemoryOwnershipLookup, UpsellFinder};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FindArgs;
use crate::output::output;

/// Handle `upsell find`.
pub async fn handle(
    args: &FindArgs,
    config: &UpsellConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let report = run(args, config).await?;
    if args.stats {
        output(&report, flags.format)
    } else {
        output(&report.opportunities, flags.format)
    }
}

async fn run(args: &FindArgs, config: &UpsellConfig) -> anyhow::Result<UpsellReport> {
    let policies: Vec<Policy> = read_json(&args.policies)?;
    let ownerships: Vec<OwnedVehicle> = read_json(&args.ownerships)?;
    tracing::debug!(
        policies = policies.len(),
        ownerships = ownerships.len(),
        "loaded find inputs"
    );

    let finder = UpsellFinder::with_options(
        InMemoryOwnershipLookup::from_records(ownerships),
        FinderOptions::from(&config.finder),
    );
    finder
        .find_with_report(&policies)
        .await
        .context("find: upsell search failed")
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use upsell_core::UpsellOpportunity;

    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("fixture should write");
        path
    }

    #[tokio::test]
    async fn reports_uncovered_vehicles_from_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = FindArgs {
            policies: write(
                &dir,
                "policies.json",
                r#"[{"person_id": "P1", "vehicle_id": "V8"}, {"person_id": "P2", "vehicle_id": "V6"}]"#,
            ),
            ownerships: write(
                &dir,
                "ownerships.json",
                r#"[
                    {"person_id": "P1", "vehicle_id": "V8"},
                    {"person_id": "P1", "vehicle_id": "V3"},
                    {"person_id": "P2", "vehicle_id": "V6"},
                    {"person_id": "P9", "vehicle_id": "V1"}
                ]"#,
            ),
            stats: true,
        };

        let report = run(&args, &UpsellConfig::default()).await.unwrap();

        assert_eq!(report.opportunities, vec![UpsellOpportunity::new("P1", "V3")]);
        assert_eq!(report.stats.already_covered, 2);
        assert_eq!(report.stats.chunks, 1);
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = FindArgs {
            policies: dir.path().join("absent.json"),
            ownerships: dir.path().join("absent.json"),
            stats: false,
        };

        let err = run(&args, &UpsellConfig::default()).await.unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }

    #[tokio::test]
    async fn malformed_policy_file_is_a_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = FindArgs {
            policies: write(&dir, "policies.json", r#"[{"person_id": "P1"}]"#),
            ownerships: write(&dir, "ownerships.json", "[]"),
            stats: false,
        };

        let err = run(&args, &UpsellConfig::default()).await.unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
    }

    #[tokio::test]
    async fn blank_person_id_fails_the_search() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = FindArgs {
            policies: write(
                &dir,
                "policies.json",
                r#"[{"person_id": "", "vehicle_id": "V8"}]"#,
            ),
            ownerships: write(&dir, "ownerships.json", "[]"),
            stats: false,
        };

        let err = run(&args, &UpsellConfig::default()).await.unwrap_err();
        assert!(format!("{err:#}").contains("invalid policy at index 0"));
    }
}
