use upsell_config::UpsellConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod demo;
pub mod find;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &UpsellConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Find(args) => find::handle(&args, config, flags).await,
        Commands::Demo(args) => demo::handle(&args, config, flags).await,
    }
}
