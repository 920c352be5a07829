mod create_embed;
mod create_message;
mod member;

use async_trait::async_trait;
pub use create_embed::{CreateEmbed, EmbedField, EmbedFooter};
pub use create_message::CreateMessage;
pub use domain_shared::discord::ChannelId;
use domain_shared::discord::{RoleId, UserId};
pub use member::Member;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait DiscordPort {
    /// Returns `None` when the user is not a member of the served guild.
    async fn fetch_member(&self, user_id: UserId) -> Result<Option<Member>, DiscordError>;

    async fn remove_member_role(
        &self,
        user_id: UserId,
        role_id: RoleId,
        reason: &str,
    ) -> Result<(), DiscordError>;

    async fn add_member_roles(
        &self,
        user_id: UserId,
        role_ids: &[RoleId],
        reason: &str,
    ) -> Result<(), DiscordError>;

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<(), DiscordError>;
}

#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Discord is unavailable")]
    DiscordUnavailable,
}
