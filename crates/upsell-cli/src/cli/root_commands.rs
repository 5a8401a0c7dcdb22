use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Report owned vehicles not covered by any policy.
    Find(FindArgs),
    /// Run the built-in sample: synthetic policies against a fixed ownership stub.
    Demo(DemoArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FindArgs {
    /// JSON array of policies: `[{"person_id": "...", "vehicle_id": "..."}]`
    #[arg(long)]
    pub policies: PathBuf,

    /// JSON array of owned vehicles, same shape as policies.
    #[arg(long)]
    pub ownerships: PathBuf,

    /// Print pipeline counters alongside the opportunities.
    #[arg(long)]
    pub stats: bool,
}

#[derive(Clone, Debug, Args)]
pub struct DemoArgs {
    /// Number of synthetic policies to generate.
    #[arg(long, default_value_t = 202)]
    pub policies: usize,

    /// Print pipeline counters alongside the opportunities.
    #[arg(long)]
    pub stats: bool,
}
