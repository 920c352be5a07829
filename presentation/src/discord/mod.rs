use crate::application_ports::Locator;
use poise::serenity_prelude as serenity;
use poise::serenity_prelude::{ClientBuilder, GuildId};
use tracing::{info, instrument};

mod events;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

pub struct Data<L> {
    pub locator: L,
    pub guild: GuildId,
}

#[instrument(level = "info", skip(locator, token, intents))]
pub async fn run_bot<L: Locator + Send + Sync + 'static>(
    locator: L,
    token: String,
    intents: serenity::GatewayIntents,
    guild: GuildId,
) -> Result<(), Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |_ctx, _ready, _framework| {
            Box::pin(async move { Ok(Data { locator, guild }) })
        })
        .build();

    let mut client = ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;
    client.start().await?;

    Ok(())
}

async fn event_handler<L: Locator>(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data<L>, Error>,
    data: &Data<L>,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!("Logged in as {}!", data_about_bot.user.tag());
        }
        serenity::FullEvent::Message { new_message } => {
            events::message::handle_message(new_message, data).await?;
        }
        serenity::FullEvent::VoiceStateUpdate { old, new } => {
            events::voice_state::handle_voice_state_update(old.as_ref(), new, data).await?;
        }
        _ => {}
    }

    Ok(())
}
