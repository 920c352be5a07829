use domain_shared::discord::MessageId;
use poise::serenity_prelude as serenity;
use tracing::instrument;

#[instrument(level = "trace", skip(message_id))]
pub fn domain_to_serenity_message_id(message_id: MessageId) -> serenity::MessageId {
    serenity::MessageId::new(message_id.0)
}
