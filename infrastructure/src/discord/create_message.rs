use crate::discord::create_embed::domain_to_serenity_create_embed;
use crate::discord::message_id::domain_to_serenity_message_id;
use domain::ports::discord::CreateMessage;
use poise::serenity_prelude as serenity;

pub fn domain_to_serenity_create_message(
    channel_id: serenity::ChannelId,
    message: CreateMessage,
) -> serenity::CreateMessage {
    let CreateMessage {
        content,
        embeds,
        reference,
    } = message;

    let mut message = serenity::CreateMessage::default();

    if let Some(content) = content {
        message = message.content(content);
    }

    for embed in embeds {
        message = message.embed(domain_to_serenity_create_embed(embed));
    }

    if let Some(reference) = reference {
        let reference = domain_to_serenity_message_id(reference);
        message = message.reference_message((channel_id, reference));
    }

    message
}
