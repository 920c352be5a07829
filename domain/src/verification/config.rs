use crate::verification::roles::{AGE_BRACKETS, ALWAYS_ASSIGNED_ROLE_NAMES};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use domain_shared::discord::{ChannelId, RoleId};
use std::collections::{BTreeMap, HashSet};
use tracing::instrument;

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Africa::Algiers;

/// Static verification settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    pub prefix: String,
    pub allowed_roles: HashSet<RoleId>,
    pub allowed_channel_id: ChannelId,
    pub unverified_role_id: RoleId,
    pub admin_role_id: RoleId,
    pub log_channel_id: ChannelId,
    pub verification_voice_channel_ids: Vec<ChannelId>,
    pub roles: BTreeMap<String, RoleId>,
    pub timezone: Tz,
}

impl VerificationConfig {
    pub fn role(&self, name: &str) -> Option<RoleId> {
        self.roles.get(name).copied()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn is_allowed_issuer(&self, issuer_roles: &[RoleId]) -> bool {
        issuer_roles
            .iter()
            .any(|role| self.allowed_roles.contains(role))
    }

    pub fn is_verification_voice_channel(&self, channel_id: ChannelId) -> bool {
        self.verification_voice_channel_ids.contains(&channel_id)
    }

    /// Names of role keys the verification flow refers to but the role table lacks.
    #[instrument(level = "trace", skip(self))]
    pub fn missing_well_known_roles(&self) -> Vec<&'static str> {
        AGE_BRACKETS
            .iter()
            .map(|bracket| bracket.role_name)
            .chain(ALWAYS_ASSIGNED_ROLE_NAMES)
            .filter(|name| !self.roles.contains_key(*name))
            .collect()
    }

    pub fn format_timestamp(&self, timestamp: DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.timezone)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn config() -> VerificationConfig {
        VerificationConfig {
            prefix: "!".to_string(),
            allowed_roles: HashSet::from([RoleId(10), RoleId(11)]),
            allowed_channel_id: ChannelId(100),
            unverified_role_id: RoleId(1),
            admin_role_id: RoleId(2),
            log_channel_id: ChannelId(101),
            verification_voice_channel_ids: vec![ChannelId(200), ChannelId(201)],
            roles: BTreeMap::from([
                ("15 - 17 YO".to_string(), RoleId(20)),
                ("18 - 24 YO".to_string(), RoleId(21)),
                ("25 - 30 YO".to_string(), RoleId(22)),
                ("Giveaways".to_string(), RoleId(30)),
                ("Events".to_string(), RoleId(31)),
                ("female".to_string(), RoleId(40)),
                ("gamer".to_string(), RoleId(41)),
            ]),
            timezone: DEFAULT_TIMEZONE,
        }
    }

    #[test]
    fn issuer_needs_one_allowed_role() {
        let config = config();
        assert!(config.is_allowed_issuer(&[RoleId(5), RoleId(11)]));
        assert!(!config.is_allowed_issuer(&[RoleId(5)]));
        assert!(!config.is_allowed_issuer(&[]));
    }

    #[test]
    fn reports_missing_well_known_roles() {
        let mut config = config();
        assert!(config.missing_well_known_roles().is_empty());

        config.roles.remove("Events");
        config.roles.remove("18 - 24 YO");
        assert_eq!(config.missing_well_known_roles(), vec!["18 - 24 YO", "Events"]);
    }

    #[test]
    fn formats_timestamps_in_configured_timezone() {
        let config = config();
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 5).unwrap();
        assert_eq!(config.format_timestamp(timestamp), "2024-03-02 00:30:05");
    }
}
