use crate::application_ports::Locator;
use crate::discord::{Data, Error};
use application_ports::verification::VoiceStateDto;
use domain_shared::discord::{ChannelId, UserId};
use poise::serenity_prelude as serenity;
use tracing::{debug, instrument};

#[instrument(level = "trace", skip_all, fields(user_id = new.user_id.get()))]
pub async fn handle_voice_state_update<L: Locator>(
    old: Option<&serenity::VoiceState>,
    new: &serenity::VoiceState,
    data: &Data<L>,
) -> Result<(), Error> {
    if new.guild_id != Some(data.guild) {
        return Ok(());
    }

    let voice_state = VoiceStateDto {
        user_id: UserId(new.user_id.get()),
        previous_channel_id: old
            .and_then(|old| old.channel_id)
            .map(|channel_id| ChannelId(channel_id.get())),
        channel_id: new.channel_id.map(|channel_id| ChannelId(channel_id.get())),
    };

    let outcome = data
        .locator
        .get_verification_port()
        .handle_voice_state(voice_state)
        .await?;

    debug!(outcome = ?outcome, "Handled voice state update");

    Ok(())
}
