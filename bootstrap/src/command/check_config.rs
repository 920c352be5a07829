use crate::args::CommonArgs;
use crate::config::load_config;
use clap::Args;
use tracing::{info, instrument, warn};

#[derive(Args, Debug)]
pub struct CheckConfigArgs {}

#[instrument(level = "info", skip(common_args, args))]
pub fn run(common_args: CommonArgs, args: CheckConfigArgs) -> anyhow::Result<()> {
    let CheckConfigArgs {} = args;

    let config = load_config(&common_args.config)?;

    for name in config.missing_well_known_roles() {
        warn!("Role {:?} is missing from the role table and will never be assigned", name);
    }

    info!(
        prefix = %config.prefix,
        allowed_roles = config.allowed_roles.len(),
        roles = config.roles.len(),
        voice_channels = config.verification_voice_channel_ids.len(),
        timezone = %config.timezone,
        "Config is valid",
    );

    Ok(())
}
