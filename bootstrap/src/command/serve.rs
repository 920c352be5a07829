use crate::args::CommonArgs;
use crate::config::load_config;
use crate::locator::ApplicationPortLocator;
use anyhow::anyhow;
use application::verification::VerificationService;
use clap::Args;
use infrastructure::discord::DiscordAdapter;
use poise::serenity_prelude::{GatewayIntents, GuildId, Http};
use presentation::discord::run_bot;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Args)]
pub struct ServeArgs {
    /// The token for the Discord bot
    #[arg(long, env = "DISCORD_BOT_TOKEN")]
    pub discord_bot_token: String,
    /// The ID of the Discord guild (server) for the bot to serve in
    #[arg(long, env = "DISCORD_GUILD_ID")]
    pub guild: u64,
}

#[instrument(level = "trace", skip(common_args, args))]
pub async fn run(common_args: CommonArgs, args: ServeArgs) -> anyhow::Result<()> {
    let ServeArgs {
        discord_bot_token,
        guild,
    } = args;
    let guild = GuildId::new(guild);

    let config = load_config(&common_args.config)?;
    for name in config.missing_well_known_roles() {
        warn!("Role {:?} is missing from the role table and will never be assigned", name);
    }
    let config = Arc::new(config);

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_VOICE_STATES;

    let serenity_client = Arc::new(Http::new(&discord_bot_token));

    let discord_adapter = Arc::new(DiscordAdapter::new(serenity_client, guild));
    let verification_adapter = Arc::new(VerificationService::new(discord_adapter, config));

    let locator = ApplicationPortLocator::new(verification_adapter);

    info!(guild_id = guild.get(), "Starting verification bot");

    let bot = tokio::spawn(run_bot(locator, discord_bot_token, intents, guild));

    bot.await?.map_err(|e| anyhow!(e))?;

    Ok(())
}
