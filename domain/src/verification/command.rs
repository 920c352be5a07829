use domain_shared::discord::UserId;
use tracing::instrument;

/// A parsed `<prefix><target> <roles or age...>` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub issuer_id: UserId,
    pub target_user_token: String,
    pub age_token: Option<String>,
    pub role_name_tokens: Vec<String>,
}

/// Returns the text after the prefix, or `None` if the message is not a command.
pub fn command_arguments<'a>(prefix: &str, content: &'a str) -> Option<&'a str> {
    content.strip_prefix(prefix)
}

impl CommandInvocation {
    /// Tokens are separated by commas and/or whitespace. The first token names the target,
    /// the first purely numeric token after it is the age, everything else is a role name.
    #[instrument(level = "debug")]
    pub fn parse(issuer_id: UserId, arguments: &str) -> Self {
        let mut tokens = arguments
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());

        let target_user_token = tokens.next().unwrap_or_default().to_string();

        let mut age_token = None;
        let mut role_name_tokens = Vec::new();
        for token in tokens {
            if age_token.is_none() && is_numeric(token) {
                age_token = Some(token.to_string());
            } else {
                role_name_tokens.push(token.to_string());
            }
        }

        Self {
            issuer_id,
            target_user_token,
            age_token,
            role_name_tokens,
        }
    }

    /// Accepts a raw snowflake or a user mention (`<@id>`, `<@!id>`).
    pub fn target_user_id(&self) -> Option<UserId> {
        let token = self.target_user_token.as_str();
        let token = token
            .strip_prefix("<@")
            .and_then(|t| t.strip_suffix('>'))
            .map(|t| t.strip_prefix('!').unwrap_or(t))
            .unwrap_or(token);

        if !is_numeric(token) {
            return None;
        }
        token.parse().ok().map(UserId)
    }

    pub fn age(&self) -> Option<u32> {
        self.age_token.as_deref().and_then(|age| age.parse().ok())
    }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}
