use anyhow::Context;
use upsell_config::UpsellConfig;

use crate::cli::GlobalFlags;

/// Load layered config, then apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<UpsellConfig> {
    let config = UpsellConfig::load_with_dotenv().context("failed to load upsell configuration")?;
    apply_overrides(config, flags)
}

fn apply_overrides(mut config: UpsellConfig, flags: &GlobalFlags) -> anyhow::Result<UpsellConfig> {
    if let Some(chunk_size) = flags.chunk_size {
        config.finder.chunk_size = chunk_size;
    }
    if let Some(concurrency) = flags.concurrency {
        config.finder.max_concurrent_lookups = concurrency;
    }
    config
        .finder
        .validate()
        .context("invalid command-line override")?;
    Ok(config)
}
