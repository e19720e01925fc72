//! Identity of the signed-in user, shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application root creates one attached [`IdentityContext`] and provides
//! it to the tree. The session bootstrapper is its only writer during
//! bootstrap; afterwards any component may replace it (sign-out, role change).
//! Components rendered outside the root see the `Detached` variant, which
//! reads as "no identity" and ignores writes.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::auth::claims::Claims;
use crate::auth::roles::OrgRole;

/// The authenticated principal.
///
/// `team_roles` / `project_roles` are `None` until loaded; an empty map means
/// loaded with no memberships.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub org_role: String,
    pub team_roles: Option<HashMap<String, String>>,
    pub project_roles: Option<HashMap<String, String>>,
}

impl Identity {
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            id: claims.user_id.clone(),
            org_role: claims.org_role.clone(),
            team_roles: None,
            project_roles: None,
        }
    }

    pub fn role(&self) -> OrgRole {
        OrgRole::from_code(&self.org_role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == OrgRole::Admin
    }

    pub fn team_role(&self, team_id: &str) -> Option<OrgRole> {
        self.team_roles.as_ref()?.get(team_id).map(|code| OrgRole::from_code(code))
    }

    pub fn project_role(&self, project_id: &str) -> Option<OrgRole> {
        self.project_roles.as_ref()?.get(project_id).map(|code| OrgRole::from_code(code))
    }

    /// Organization admins administer every team; otherwise the team role
    /// must be admin.
    pub fn can_admin_team(&self, team_id: &str) -> bool {
        self.is_admin() || self.team_role(team_id) == Some(OrgRole::Admin)
    }
}

/// Handle to the current identity.
#[derive(Clone, Copy, Debug, Default)]
pub enum IdentityContext {
    Attached(RwSignal<Option<Identity>>),
    /// Inert value seen outside the provider.
    #[default]
    Detached,
}

impl IdentityContext {
    /// Create an attached context with no identity.
    pub fn new() -> Self {
        Self::Attached(RwSignal::new(None))
    }

    pub fn is_attached(&self) -> bool {
        matches!(self, Self::Attached(_))
    }

    /// Tracked read; re-runs effects when the identity changes.
    pub fn read(&self) -> Option<Identity> {
        match self {
            Self::Attached(signal) => signal.get(),
            Self::Detached => None,
        }
    }

    pub fn read_untracked(&self) -> Option<Identity> {
        match self {
            Self::Attached(signal) => signal.get_untracked(),
            Self::Detached => None,
        }
    }

    /// Replace the identity wholesale. Writing the value already held does
    /// not notify subscribers.
    pub fn replace(&self, next: Option<Identity>) {
        match self {
            Self::Attached(signal) => signal.maybe_update(|current| {
                if *current == next {
                    false
                } else {
                    *current = next;
                    true
                }
            }),
            Self::Detached => {
                #[cfg(debug_assertions)]
                log::error!("identity replace on a detached context ignored; is the provider mounted?");
            }
        }
    }
}

/// Install `ctx` for the current component subtree.
pub fn provide_identity_context(ctx: IdentityContext) {
    provide_context(ctx);
}

/// The nearest provided identity context, or `Detached` outside a provider.
pub fn use_identity_context() -> IdentityContext {
    use_context::<IdentityContext>().unwrap_or_default()
}
