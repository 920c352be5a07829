use crate::discord::role_id::serenity_to_domain_role_id;
use crate::discord::timestamp::serenity_to_chrono_timestamp;
use crate::discord::user_id::serenity_to_domain_user_id;
use chrono::DateTime;
use domain::ports::discord::Member;
use poise::serenity_prelude as serenity;
use tracing::instrument;

#[instrument(level = "trace", skip(member))]
pub fn serenity_to_domain_member(member: serenity::Member) -> Member {
    let created_at =
        serenity_to_chrono_timestamp(member.user.id.created_at()).unwrap_or(DateTime::UNIX_EPOCH);

    Member {
        user_id: serenity_to_domain_user_id(member.user.id),
        tag: member.user.tag(),
        avatar_url: member.user.face(),
        roles: member
            .roles
            .into_iter()
            .map(serenity_to_domain_role_id)
            .collect(),
        joined_at: member.joined_at.and_then(serenity_to_chrono_timestamp),
        created_at,
    }
}
