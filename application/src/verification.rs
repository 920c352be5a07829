use crate::member_locks::MemberLocks;
use application_ports::verification::{
    CommandMessageDto, CommandOutcome, VerificationError, VerificationPort, VoiceStateDto,
    VoiceStateOutcome,
};
use async_trait::async_trait;
use chrono::Utc;
use domain::ports::discord::{CreateMessage, DiscordError, DiscordPort, Member};
use domain::verification::command::{command_arguments, CommandInvocation};
use domain::verification::config::VerificationConfig;
use domain::verification::messages;
use domain::verification::roles::{RoleAssignment, RoleResolver};
use domain::verification::Issuer;
use domain_shared::discord::{ChannelId, UserId};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

pub struct VerificationService {
    discord_port: Arc<dyn DiscordPort + Send + Sync>,
    config: Arc<VerificationConfig>,
    member_locks: MemberLocks,
}

impl VerificationService {
    #[instrument(level = "debug", skip_all)]
    pub fn new(
        discord_port: Arc<dyn DiscordPort + Send + Sync>,
        config: Arc<VerificationConfig>,
    ) -> Self {
        Self {
            discord_port,
            config,
            member_locks: MemberLocks::default(),
        }
    }

    #[instrument(level = "debug", skip(self, message))]
    async fn send(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<(), VerificationError> {
        self.discord_port
            .send_message(channel_id, message)
            .await
            .map_err(map_discord_err)
    }

    #[instrument(level = "debug", skip(self))]
    async fn find_member(&self, user_id: UserId) -> Option<Member> {
        match self.discord_port.fetch_member(user_id).await {
            Ok(member) => member,
            // The adapter has already logged the failure.
            Err(_) => None,
        }
    }

    /// Removes the unverified role, assigns the resolved roles, and writes the audit entry.
    /// A failure after the removal leaves the member as is.
    #[instrument(level = "info", skip_all, fields(user_id = target.user_id.0))]
    async fn verify(
        &self,
        message: &CommandMessageDto,
        target: &Member,
        issuer: &Issuer,
        assignment: &RoleAssignment,
    ) -> Result<(), DiscordError> {
        let reason = format!("Verified by {} ({})", issuer.tag, issuer.user_id.0);

        self.discord_port
            .remove_member_role(target.user_id, assignment.removed_role, &reason)
            .await?;

        if !assignment.added_roles.is_empty() {
            self.discord_port
                .add_member_roles(target.user_id, &assignment.added_roles, &reason)
                .await?;
        }

        let log = messages::verification_log(&self.config, target, issuer, assignment, Utc::now());
        self.discord_port
            .send_message(self.config.log_channel_id, log)
            .await?;

        let reply = messages::verification_succeeded(message.message_id, target, assignment);
        self.discord_port
            .send_message(message.channel_id, reply)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl VerificationPort for VerificationService {
    #[instrument(
        level = "info",
        skip_all,
        fields(message_id = message.message_id.0, author_id = message.author_id.0)
    )]
    async fn handle_command(
        &self,
        message: CommandMessageDto,
    ) -> Result<CommandOutcome, VerificationError> {
        if message.author_is_bot {
            return Ok(CommandOutcome::NotACommand);
        }
        let Some(arguments) = command_arguments(&self.config.prefix, &message.content) else {
            return Ok(CommandOutcome::NotACommand);
        };

        if !self.config.is_allowed_issuer(&message.author_roles) {
            debug!("Ignoring verification command from user without an allowed role");
            return Ok(CommandOutcome::Unauthorized);
        }

        if message.channel_id != self.config.allowed_channel_id {
            let reply = messages::wrong_channel(message.message_id, self.config.allowed_channel_id);
            self.send(message.channel_id, reply).await?;
            return Ok(CommandOutcome::WrongChannel);
        }

        let invocation = CommandInvocation::parse(message.author_id, arguments);

        let Some(target_id) = invocation.target_user_id() else {
            info!(token = %invocation.target_user_token, "Verification target is not a user id");
            self.send(message.channel_id, messages::user_not_found(message.message_id))
                .await?;
            return Ok(CommandOutcome::UserNotFound);
        };

        let _member_guard = self.member_locks.lock(target_id).await;

        let Some(target) = self.find_member(target_id).await else {
            info!(target_id = target_id.0, "Verification target not found");
            self.send(message.channel_id, messages::user_not_found(message.message_id))
                .await?;
            return Ok(CommandOutcome::UserNotFound);
        };

        if !target.has_role(self.config.unverified_role_id) {
            info!(target_id = target_id.0, "Verification target is already verified");
            self.send(message.channel_id, messages::already_verified(message.message_id))
                .await?;
            return Ok(CommandOutcome::AlreadyVerified);
        }

        let assignment = RoleResolver::new(&self.config).resolve(&invocation);
        let issuer = Issuer {
            user_id: message.author_id,
            tag: message.author_tag.clone(),
            avatar_url: message.author_avatar_url.clone(),
        };

        match self.verify(&message, &target, &issuer, &assignment).await {
            Ok(()) => {
                info!(
                    target_id = target_id.0,
                    roles = ?assignment.resolved_names,
                    "Member verified",
                );
                Ok(CommandOutcome::Verified {
                    user_id: target_id,
                    added_roles: assignment.added_roles,
                })
            }
            Err(error) => {
                error!(
                    target_id = target_id.0,
                    issuer_id = message.author_id.0,
                    error = %error,
                    "Failed to verify member",
                );
                self.send(
                    message.channel_id,
                    messages::verification_failed(message.message_id),
                )
                .await?;
                Err(VerificationError::TemporaryUnavailable)
            }
        }
    }

    #[instrument(level = "debug", skip_all, fields(user_id = voice_state.user_id.0))]
    async fn handle_voice_state(
        &self,
        voice_state: VoiceStateDto,
    ) -> Result<VoiceStateOutcome, VerificationError> {
        let Some(channel_id) = voice_state.channel_id else {
            return Ok(VoiceStateOutcome::Ignored);
        };
        if voice_state.previous_channel_id == Some(channel_id)
            || !self.config.is_verification_voice_channel(channel_id)
        {
            return Ok(VoiceStateOutcome::Ignored);
        }

        let member = match self.discord_port.fetch_member(voice_state.user_id).await {
            Ok(Some(member)) => member,
            Ok(None) => return Ok(VoiceStateOutcome::Ignored),
            // The adapter has already logged the failure.
            Err(_) => return Err(VerificationError::TemporaryUnavailable),
        };

        if !member.has_role(self.config.unverified_role_id) {
            return Ok(VoiceStateOutcome::Ignored);
        }

        let alert = messages::voice_alert(&self.config, &member, channel_id, Utc::now());
        self.send(channel_id, alert).await?;

        info!(
            user_id = member.user_id.0,
            channel_id = channel_id.0,
            "Alerted staff about unverified member in verification channel",
        );

        Ok(VoiceStateOutcome::AlertSent { channel_id })
    }
}

#[instrument(level = "trace", skip_all)]
fn map_discord_err(err: DiscordError) -> VerificationError {
    match err {
        DiscordError::DiscordUnavailable => {
            error!("DiscordError::DiscordUnavailable");
            VerificationError::TemporaryUnavailable
        }
    }
}
