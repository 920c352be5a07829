use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;

pub fn serenity_to_chrono_timestamp(timestamp: serenity::Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.unix_timestamp(), 0)
}

pub fn chrono_to_serenity_timestamp(timestamp: DateTime<Utc>) -> Option<serenity::Timestamp> {
    serenity::Timestamp::from_unix_timestamp(timestamp.timestamp()).ok()
}
