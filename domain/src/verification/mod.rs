pub mod command;
pub mod config;
pub mod messages;
pub mod roles;

use domain_shared::discord::UserId;

/// Staff member who issued a verification command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issuer {
    pub user_id: UserId,
    pub tag: String,
    pub avatar_url: String,
}
