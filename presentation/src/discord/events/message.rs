use crate::application_ports::Locator;
use crate::discord::{Data, Error};
use application_ports::verification::{CommandMessageDto, CommandOutcome};
use domain_shared::discord::{ChannelId, MessageId, RoleId, UserId};
use poise::serenity_prelude as serenity;
use tracing::{debug, instrument};

#[instrument(level = "trace", skip_all, fields(message_id = message.id.get()))]
pub async fn handle_message<L: Locator>(
    message: &serenity::Message,
    data: &Data<L>,
) -> Result<(), Error> {
    if message.guild_id != Some(data.guild) {
        return Ok(());
    }

    let author_roles: Vec<RoleId> = message
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| RoleId(role.get())).collect())
        .unwrap_or_default();

    let command = CommandMessageDto {
        message_id: MessageId(message.id.get()),
        channel_id: ChannelId(message.channel_id.get()),
        author_id: UserId(message.author.id.get()),
        author_tag: message.author.tag(),
        author_avatar_url: message.author.face(),
        author_is_bot: message.author.bot,
        author_roles,
        content: message.content.clone(),
    };

    let outcome = data
        .locator
        .get_verification_port()
        .handle_command(command)
        .await?;

    if outcome != CommandOutcome::NotACommand {
        debug!(
            author_id = message.author.id.get(),
            outcome = ?outcome,
            "Handled verification command",
        );
    }

    Ok(())
}
