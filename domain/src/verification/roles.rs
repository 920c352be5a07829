use crate::verification::command::CommandInvocation;
use crate::verification::config::VerificationConfig;
use domain_shared::discord::RoleId;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBracket {
    pub min: u32,
    pub max: u32,
    pub role_name: &'static str,
}

pub static AGE_BRACKETS: [AgeBracket; 3] = [
    AgeBracket {
        min: 15,
        max: 17,
        role_name: "15 - 17 YO",
    },
    AgeBracket {
        min: 18,
        max: 24,
        role_name: "18 - 24 YO",
    },
    AgeBracket {
        min: 25,
        max: 30,
        role_name: "25 - 30 YO",
    },
];

/// Community roles every verified member receives.
pub const ALWAYS_ASSIGNED_ROLE_NAMES: [&str; 2] = ["Giveaways", "Events"];

pub fn age_bracket(age: u32) -> Option<&'static AgeBracket> {
    AGE_BRACKETS
        .iter()
        .find(|bracket| (bracket.min..=bracket.max).contains(&age))
}

/// Role changes applied to a member on verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub removed_role: RoleId,
    pub added_roles: Vec<RoleId>,
    pub resolved_names: Vec<String>,
}

impl RoleAssignment {
    fn assign(&mut self, name: impl Into<String>, role_id: RoleId) {
        self.added_roles.push(role_id);
        self.resolved_names.push(name.into());
    }
}

pub struct RoleResolver<'a> {
    config: &'a VerificationConfig,
}

impl<'a> RoleResolver<'a> {
    pub fn new(config: &'a VerificationConfig) -> Self {
        Self { config }
    }

    /// Unknown role names are dropped. Duplicates are kept as given.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve(&self, invocation: &CommandInvocation) -> RoleAssignment {
        let mut assignment = RoleAssignment {
            removed_role: self.config.unverified_role_id,
            added_roles: Vec::new(),
            resolved_names: Vec::new(),
        };

        self.resolve_age_role(invocation, &mut assignment);
        self.resolve_named_roles(invocation, &mut assignment);
        self.resolve_always_assigned_roles(&mut assignment);

        assignment
    }

    #[instrument(level = "trace", skip_all)]
    fn resolve_age_role(&self, invocation: &CommandInvocation, assignment: &mut RoleAssignment) {
        let Some(age) = invocation.age() else {
            return;
        };
        let Some(bracket) = age_bracket(age) else {
            debug!(age, "Age is outside of every bracket");
            return;
        };
        if let Some(role_id) = self.config.role(bracket.role_name) {
            assignment.assign(bracket.role_name, role_id);
        }
    }

    #[instrument(level = "trace", skip_all)]
    fn resolve_named_roles(&self, invocation: &CommandInvocation, assignment: &mut RoleAssignment) {
        for token in &invocation.role_name_tokens {
            let name = token.to_lowercase();
            match self.config.role(&name) {
                Some(role_id) => assignment.assign(name, role_id),
                None => debug!(role = %token, "Dropping unknown role"),
            }
        }
    }

    #[instrument(level = "trace", skip_all)]
    fn resolve_always_assigned_roles(&self, assignment: &mut RoleAssignment) {
        for name in ALWAYS_ASSIGNED_ROLE_NAMES {
            if let Some(role_id) = self.config.role(name) {
                assignment.assign(name, role_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::config::tests::config;
    use domain_shared::discord::UserId;

    fn resolve(arguments: &str) -> RoleAssignment {
        let config = config();
        let invocation = CommandInvocation::parse(UserId(7), arguments);
        RoleResolver::new(&config).resolve(&invocation)
    }

    #[test]
    fn bracket_boundaries() {
        assert_eq!(age_bracket(14), None);
        assert_eq!(age_bracket(15).map(|b| b.role_name), Some("15 - 17 YO"));
        assert_eq!(age_bracket(17).map(|b| b.role_name), Some("15 - 17 YO"));
        assert_eq!(age_bracket(18).map(|b| b.role_name), Some("18 - 24 YO"));
        assert_eq!(age_bracket(24).map(|b| b.role_name), Some("18 - 24 YO"));
        assert_eq!(age_bracket(25).map(|b| b.role_name), Some("25 - 30 YO"));
        assert_eq!(age_bracket(30).map(|b| b.role_name), Some("25 - 30 YO"));
        assert_eq!(age_bracket(31), None);
    }

    #[test]
    fn age_sixteen_gets_only_the_youngest_bracket() {
        let assignment = resolve("1002 16");

        assert_eq!(assignment.removed_role, RoleId(1));
        assert_eq!(
            assignment.added_roles,
            vec![RoleId(20), RoleId(30), RoleId(31)]
        );
        assert!(!assignment.added_roles.contains(&RoleId(21)));
        assert!(!assignment.added_roles.contains(&RoleId(22)));
    }

    #[test]
    fn age_with_named_roles() {
        let assignment = resolve("1002 29, female, gamer");

        assert_eq!(
            assignment.added_roles,
            vec![RoleId(22), RoleId(40), RoleId(41), RoleId(30), RoleId(31)]
        );
        assert_eq!(
            assignment.resolved_names,
            vec!["25 - 30 YO", "female", "gamer", "Giveaways", "Events"]
        );
    }

    #[test]
    fn role_names_are_lower_cased() {
        let assignment = resolve("1002 FeMaLe");

        assert_eq!(assignment.added_roles, vec![RoleId(40), RoleId(30), RoleId(31)]);
    }

    #[test]
    fn unknown_roles_and_ages_are_dropped() {
        let assignment = resolve("1002 astronaut 64");

        assert_eq!(assignment.added_roles, vec![RoleId(30), RoleId(31)]);
        assert_eq!(assignment.resolved_names, vec!["Giveaways", "Events"]);
    }

    #[test]
    fn duplicates_are_not_removed() {
        let assignment = resolve("1002 gamer gamer");

        assert_eq!(
            assignment.added_roles,
            vec![RoleId(41), RoleId(41), RoleId(30), RoleId(31)]
        );
    }

    #[test]
    fn missing_always_assigned_roles_are_skipped() {
        let mut config = config();
        config.roles.remove("Giveaways");
        config.roles.remove("Events");
        let invocation = CommandInvocation::parse(UserId(7), "1002");

        let assignment = RoleResolver::new(&config).resolve(&invocation);

        assert!(assignment.added_roles.is_empty());
        assert!(assignment.resolved_names.is_empty());
    }
}
