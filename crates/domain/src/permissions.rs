//! Role-based feature gating for the quiz selection screen.

use crate::session::Role;

/// What a role may do on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions {
    /// May start a standard quiz.
    pub can_start_quiz: bool,
    /// May enter free trial mode.
    pub can_free_trial: bool,
    /// May pick difficulty subjects.
    pub can_access_filters: bool,
}

impl Permissions {
    /// Permissions granted to a role.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        Self {
            can_start_quiz: matches!(role, Role::Admin | Role::Regular),
            can_free_trial: matches!(role, Role::Admin | Role::FreeTrial),
            can_access_filters: matches!(role, Role::Admin),
        }
    }
}
