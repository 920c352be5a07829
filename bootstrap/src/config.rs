use anyhow::{anyhow, bail, Context};
use chrono_tz::Tz;
use domain::verification::config::{VerificationConfig, DEFAULT_TIMEZONE};
use domain_shared::discord::{ChannelId, RoleId};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::instrument;

/// On-disk layout of the verification settings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    prefix: String,
    allowed_roles: Vec<RoleId>,
    allowed_channel_id: ChannelId,
    non_verified_role_id: RoleId,
    log_channel_id: ChannelId,
    admin_role_id: RoleId,
    verification_vc_id: ChannelId,
    #[serde(default)]
    verification_vc_id2: Option<ChannelId>,
    roles: BTreeMap<String, RoleId>,
    #[serde(default)]
    timezone: Option<String>,
}

#[instrument(level = "info")]
pub fn load_config(path: &Path) -> anyhow::Result<VerificationConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config file {}", path.display()))?;

    parse_config(&content).with_context(|| format!("Invalid config file {}", path.display()))
}

pub fn parse_config(content: &str) -> anyhow::Result<VerificationConfig> {
    let ConfigFile {
        prefix,
        allowed_roles,
        allowed_channel_id,
        non_verified_role_id,
        log_channel_id,
        admin_role_id,
        verification_vc_id,
        verification_vc_id2,
        roles,
        timezone,
    } = serde_json::from_str(content)?;

    if prefix.is_empty() {
        bail!("prefix must not be empty");
    }

    let timezone = match timezone {
        Some(timezone) => timezone
            .parse::<Tz>()
            .map_err(|e| anyhow!("Unknown timezone {:?}: {}", timezone, e))?,
        None => DEFAULT_TIMEZONE,
    };

    let verification_voice_channel_ids = std::iter::once(verification_vc_id)
        .chain(verification_vc_id2)
        .collect();

    Ok(VerificationConfig {
        prefix,
        allowed_roles: allowed_roles.into_iter().collect(),
        allowed_channel_id,
        unverified_role_id: non_verified_role_id,
        admin_role_id,
        log_channel_id,
        verification_voice_channel_ids,
        roles,
        timezone,
    })
}
