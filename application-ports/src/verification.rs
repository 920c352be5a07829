use async_trait::async_trait;
use domain_shared::discord::{ChannelId, MessageId, RoleId, UserId};
use thiserror::Error;

#[async_trait]
pub trait VerificationPort {
    async fn handle_command(
        &self,
        message: CommandMessageDto,
    ) -> Result<CommandOutcome, VerificationError>;
    async fn handle_voice_state(
        &self,
        voice_state: VoiceStateDto,
    ) -> Result<VoiceStateOutcome, VerificationError>;
}

/// A guild text message that may carry a verification command.
#[derive(Debug, Clone)]
pub struct CommandMessageDto {
    pub message_id: MessageId,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub author_tag: String,
    pub author_avatar_url: String,
    pub author_is_bot: bool,
    pub author_roles: Vec<RoleId>,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct VoiceStateDto {
    pub user_id: UserId,
    pub previous_channel_id: Option<ChannelId>,
    pub channel_id: Option<ChannelId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    NotACommand,
    Unauthorized,
    WrongChannel,
    UserNotFound,
    AlreadyVerified,
    Verified {
        user_id: UserId,
        added_roles: Vec<RoleId>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceStateOutcome {
    Ignored,
    AlertSent { channel_id: ChannelId },
}

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("Service is temporarily unavailable")]
    TemporaryUnavailable,
}
