use crate::ports::discord::{CreateEmbed, CreateMessage, Member};
use crate::verification::config::VerificationConfig;
use crate::verification::roles::RoleAssignment;
use crate::verification::Issuer;
use chrono::{DateTime, Utc};
use domain_shared::discord::{ChannelId, MessageId};
use tracing::instrument;

pub const USER_NOT_FOUND: &str = "User not found.";
pub const ALREADY_VERIFIED: &str = "This user is already verified.";
pub const VERIFICATION_FAILED: &str = "There was an error processing the verification.";
pub const NO_ROLES_ASSIGNED: &str = "No roles assigned";

const VERIFIED_COLOR: u32 = 0x00FF00;
const ALERT_COLOR: u32 = 0xFFA500;

pub fn wrong_channel(reply_to: MessageId, allowed_channel_id: ChannelId) -> CreateMessage {
    CreateMessage::default()
        .content(format!(
            "This command only works in <#{}>.",
            allowed_channel_id.0
        ))
        .reply_to(reply_to)
}

pub fn user_not_found(reply_to: MessageId) -> CreateMessage {
    CreateMessage::default()
        .content(USER_NOT_FOUND)
        .reply_to(reply_to)
}

pub fn already_verified(reply_to: MessageId) -> CreateMessage {
    CreateMessage::default()
        .content(ALREADY_VERIFIED)
        .reply_to(reply_to)
}

pub fn verification_failed(reply_to: MessageId) -> CreateMessage {
    CreateMessage::default()
        .content(VERIFICATION_FAILED)
        .reply_to(reply_to)
}

pub fn assigned_roles_summary(assignment: &RoleAssignment) -> String {
    if assignment.added_roles.is_empty() {
        NO_ROLES_ASSIGNED.to_string()
    } else {
        format!("Assigned roles: {}", assignment.resolved_names.join(", "))
    }
}

pub fn verification_succeeded(
    reply_to: MessageId,
    target: &Member,
    assignment: &RoleAssignment,
) -> CreateMessage {
    CreateMessage::default()
        .content(format!(
            "Successfully verified {}. {}",
            target.tag,
            assigned_roles_summary(assignment),
        ))
        .reply_to(reply_to)
}

/// Audit entry posted to the log channel after a member was verified.
#[instrument(level = "debug", skip_all)]
pub fn verification_log(
    config: &VerificationConfig,
    target: &Member,
    issuer: &Issuer,
    assignment: &RoleAssignment,
    verified_at: DateTime<Utc>,
) -> CreateMessage {
    let joined_at = target
        .joined_at
        .map(|joined_at| config.format_timestamp(joined_at))
        .unwrap_or_else(|| "Unknown".to_string());

    let embed = CreateEmbed::default()
        .title("User Verified")
        .color(VERIFIED_COLOR)
        .thumbnail(target.avatar_url.clone())
        .field(
            "Verified User",
            format!("{} ({})", target.tag, target.user_id.0),
            false,
        )
        .field(
            "Moderator",
            format!("{} ({})", issuer.tag, issuer.user_id.0),
            false,
        )
        .field(
            "Verification Date",
            config.format_timestamp(verified_at),
            false,
        )
        .field("Join Date", joined_at, false)
        .field(
            "Account Created",
            config.format_timestamp(target.created_at),
            false,
        )
        .field("Assigned Roles", assigned_roles_summary(assignment), false)
        .footer(
            format!("Verified by {}", issuer.tag),
            Some(issuer.avatar_url.clone()),
        )
        .timestamp(verified_at);

    CreateMessage::default().embed(embed)
}

/// Staff alert for an unverified member sitting in a verification voice channel.
#[instrument(level = "debug", skip_all)]
pub fn voice_alert(
    config: &VerificationConfig,
    member: &Member,
    channel_id: ChannelId,
    alerted_at: DateTime<Utc>,
) -> CreateMessage {
    let joined_at = member
        .joined_at
        .map(|joined_at| config.format_timestamp(joined_at))
        .unwrap_or_else(|| "Unknown".to_string());

    let embed = CreateEmbed::default()
        .title("Unverified Member in Verification Channel")
        .color(ALERT_COLOR)
        .thumbnail(member.avatar_url.clone())
        .field(
            "Member",
            format!("<@{}> {} ({})", member.user_id.0, member.tag, member.user_id.0),
            false,
        )
        .field("Joined Server", joined_at, false)
        .field(
            "Account Created",
            config.format_timestamp(member.created_at),
            false,
        )
        .field(
            "Action Required",
            format!("Please verify this member in <#{}>.", channel_id.0),
            false,
        )
        .timestamp(alerted_at);

    CreateMessage::default()
        .content(format!("<@&{}>", config.admin_role_id.0))
        .embed(embed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::config::tests::config;
    use chrono::TimeZone;
    use domain_shared::discord::{RoleId, UserId};

    fn member() -> Member {
        Member {
            user_id: UserId(1002),
            tag: "newbie".to_string(),
            avatar_url: "https://cdn.example/avatar.png".to_string(),
            roles: vec![RoleId(1)],
            joined_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()),
            created_at: Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    fn assignment(names: &[&str]) -> RoleAssignment {
        RoleAssignment {
            removed_role: RoleId(1),
            added_roles: names.iter().map(|_| RoleId(99)).collect(),
            resolved_names: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    #[test]
    fn summary_lists_resolved_names() {
        assert_eq!(
            assigned_roles_summary(&assignment(&["18 - 24 YO", "Giveaways"])),
            "Assigned roles: 18 - 24 YO, Giveaways"
        );
        assert_eq!(assigned_roles_summary(&assignment(&[])), "No roles assigned");
    }

    #[test]
    fn wrong_channel_names_the_allowed_channel() {
        let message = wrong_channel(MessageId(5), ChannelId(100));

        assert_eq!(
            message.content.as_deref(),
            Some("This command only works in <#100>.")
        );
        assert_eq!(message.reference, Some(MessageId(5)));
    }

    #[test]
    fn log_embed_contains_both_identities_and_dates() {
        let config = config();
        let issuer = Issuer {
            user_id: UserId(7),
            tag: "moderator".to_string(),
            avatar_url: "https://cdn.example/mod.png".to_string(),
        };
        let verified_at = Utc.with_ymd_and_hms(2024, 5, 2, 8, 15, 0).unwrap();

        let message = verification_log(
            &config,
            &member(),
            &issuer,
            &assignment(&["Events"]),
            verified_at,
        );

        let embed = &message.embeds[0];
        assert_eq!(embed.title.as_deref(), Some("User Verified"));
        assert_eq!(embed.field_value("Verified User"), Some("newbie (1002)"));
        assert_eq!(embed.field_value("Moderator"), Some("moderator (7)"));
        assert_eq!(
            embed.field_value("Verification Date"),
            Some("2024-05-02 09:15:00")
        );
        assert_eq!(embed.field_value("Join Date"), Some("2024-05-01 11:00:00"));
        assert_eq!(
            embed.field_value("Account Created"),
            Some("2020-01-01 13:00:00")
        );
        assert_eq!(embed.field_value("Assigned Roles"), Some("Assigned roles: Events"));
        assert_eq!(
            embed.footer.as_ref().map(|footer| footer.text.as_str()),
            Some("Verified by moderator")
        );
        assert_eq!(message.reference, None);
    }

    #[test]
    fn unknown_join_date() {
        let mut member = member();
        member.joined_at = None;

        let message = voice_alert(&config(), &member, ChannelId(200), Utc::now());

        assert_eq!(message.embeds[0].field_value("Joined Server"), Some("Unknown"));
    }

    #[test]
    fn voice_alert_mentions_admin_role_and_channel() {
        let alerted_at = Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).unwrap();
        let message = voice_alert(&config(), &member(), ChannelId(201), alerted_at);

        assert_eq!(message.content.as_deref(), Some("<@&2>"));
        assert_eq!(message.embeds[0].timestamp, Some(alerted_at));
        assert_eq!(
            message.embeds[0].field_value("Action Required"),
            Some("Please verify this member in <#201>.")
        );
    }
}
