use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `upsell` binary.
#[derive(Debug, Parser)]
#[command(
    name = "upsell",
    version,
    about = "Find vehicles policy holders own but have not insured"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Person ids per ownership lookup (overrides config)
    #[arg(long, global = true)]
    pub chunk_size: Option<usize>,

    /// Ownership lookups in flight at once (overrides config)
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            chunk_size: self.chunk_size,
            concurrency: self.concurrency,
        }
    }
}
