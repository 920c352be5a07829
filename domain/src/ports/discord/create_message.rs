use crate::ports::discord::CreateEmbed;
use domain_shared::discord::MessageId;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct CreateMessage {
    pub content: Option<String>,
    pub embeds: Vec<CreateEmbed>,
    /// Message in the same channel this one replies to.
    pub reference: Option<MessageId>,
}

impl CreateMessage {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn embed(mut self, embed: CreateEmbed) -> Self {
        self.embeds.push(embed);
        self
    }

    pub fn reply_to(mut self, message_id: MessageId) -> Self {
        self.reference = Some(message_id);
        self
    }
}
