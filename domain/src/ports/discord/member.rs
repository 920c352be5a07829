use chrono::{DateTime, Utc};
use domain_shared::discord::{RoleId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub user_id: UserId,
    pub tag: String,
    pub avatar_url: String,
    pub roles: Vec<RoleId>,
    pub joined_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn has_role(&self, role_id: RoleId) -> bool {
        self.roles.contains(&role_id)
    }
}
