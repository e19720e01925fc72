//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior once the
//! shell has finished bootstrapping.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::bootstrap::BootstrapState;
use crate::state::identity::{Identity, IdentityContext};

/// Redirect only after bootstrap reached `Ready` with nobody signed in, and
/// only if the user is not already on the login route.
pub fn should_redirect_unauth(
    state: &BootstrapState,
    identity: Option<&Identity>,
    current_path: &str,
    login_route: &str,
) -> bool {
    state.is_ready() && identity.is_none() && current_path.trim_end_matches('/') != login_route.trim_end_matches('/')
}

/// Redirect to `login_route` whenever the identity is cleared after
/// bootstrap, e.g. by sign-out in another component. Replaces the history
/// entry like the bootstrap redirects do.
pub fn install_unauth_redirect<F>(
    state: RwSignal<BootstrapState>,
    identity: IdentityContext,
    login_route: String,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let current = identity.read();
        let path = location.pathname.get();
        if should_redirect_unauth(&state.get(), current.as_ref(), &path, &login_route) {
            navigate(&login_route, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
