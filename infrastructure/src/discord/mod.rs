mod channel_id;
mod create_embed;
mod create_message;
mod member;
mod message_id;
mod role_id;
mod timestamp;
mod user_id;

use crate::discord::channel_id::domain_to_serenity_channel_id;
use crate::discord::create_message::domain_to_serenity_create_message;
use crate::discord::member::serenity_to_domain_member;
use crate::discord::role_id::domain_to_serenity_role_id;
use crate::discord::user_id::domain_to_serenity_user_id;
use async_trait::async_trait;
use domain::ports::discord::{ChannelId, CreateMessage, DiscordError, DiscordPort, Member};
use domain_shared::discord::{RoleId, UserId};
use ::serenity::http::HttpError;
use ::serenity::Error as SerenityError;
use poise::serenity_prelude::{Builder, GuildId, Http};
use std::sync::Arc;
use tracing::{error, instrument};

pub struct DiscordAdapter {
    client: Arc<Http>,
    guild_id: GuildId,
}

impl DiscordAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new(client: Arc<Http>, guild_id: GuildId) -> Self {
        Self { client, guild_id }
    }
}

#[async_trait]
impl DiscordPort for DiscordAdapter {
    #[instrument(level = "debug", err, skip(self, user_id))]
    async fn fetch_member(&self, user_id: UserId) -> Result<Option<Member>, DiscordError> {
        let user_id = domain_to_serenity_user_id(user_id);

        match self.client.get_member(self.guild_id, user_id).await {
            Ok(member) => Ok(Some(serenity_to_domain_member(member))),
            Err(error) if is_not_found(&error) => Ok(None),
            Err(error) => Err(map_serenity_err(error)),
        }
    }

    #[instrument(level = "debug", err, skip(self, user_id, role_id, reason))]
    async fn remove_member_role(
        &self,
        user_id: UserId,
        role_id: RoleId,
        reason: &str,
    ) -> Result<(), DiscordError> {
        let user_id = domain_to_serenity_user_id(user_id);
        let role_id = domain_to_serenity_role_id(role_id);

        self.client
            .remove_member_role(self.guild_id, user_id, role_id, Some(reason))
            .await
            .map_err(map_serenity_err)?;

        Ok(())
    }

    #[instrument(level = "debug", err, skip(self, user_id, role_ids, reason))]
    async fn add_member_roles(
        &self,
        user_id: UserId,
        role_ids: &[RoleId],
        reason: &str,
    ) -> Result<(), DiscordError> {
        let user_id = domain_to_serenity_user_id(user_id);

        for role_id in role_ids {
            let role_id = domain_to_serenity_role_id(*role_id);
            self.client
                .add_member_role(self.guild_id, user_id, role_id, Some(reason))
                .await
                .map_err(map_serenity_err)?;
        }

        Ok(())
    }

    #[instrument(level = "debug", err, skip(self, channel_id, message))]
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<(), DiscordError> {
        let channel_id = domain_to_serenity_channel_id(channel_id);
        let message = domain_to_serenity_create_message(channel_id, message);

        message
            .execute(&self.client, (channel_id, None))
            .await
            .map_err(map_serenity_err)?;

        Ok(())
    }
}

fn is_not_found(error: &SerenityError) -> bool {
    match error {
        SerenityError::Http(HttpError::UnsuccessfulRequest(response)) => {
            is_not_found_status(response.status_code.as_u16())
        }
        _ => false,
    }
}

fn is_not_found_status(status: u16) -> bool {
    status == 404
}

#[instrument(level = "trace", skip_all)]
fn map_serenity_err(err: SerenityError) -> DiscordError {
    error!(error = %err, "Discord request failed");
    DiscordError::DiscordUnavailable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_404_means_not_found() {
        assert!(is_not_found_status(404));
        assert!(!is_not_found_status(403));
        assert!(!is_not_found_status(429));
        assert!(!is_not_found_status(500));
    }

    #[test]
    fn errors_without_a_response_are_failures() {
        assert!(!is_not_found(&SerenityError::Other("gateway closed")));
    }

    #[test]
    fn failures_map_to_unavailable() {
        assert!(matches!(
            map_serenity_err(SerenityError::Other("gateway closed")),
            DiscordError::DiscordUnavailable
        ));
    }
}
