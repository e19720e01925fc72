//! Reactive [`SessionHost`] that writes into the shell's signals.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::bootstrapper::{NavTarget, SessionHost};
use crate::config::SessionConfig;
use crate::net::access_token;
use crate::state::bootstrap::BootstrapState;
use crate::state::identity::{Identity, IdentityContext};

#[derive(Clone)]
pub struct SignalHost<F> {
    identity: IdentityContext,
    state: RwSignal<BootstrapState>,
    navigate: F,
    config: SessionConfig,
}

impl<F> SignalHost<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(identity: IdentityContext, state: RwSignal<BootstrapState>, navigate: F, config: SessionConfig) -> Self {
        Self { identity, state, navigate, config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn route(&self, target: NavTarget) -> &str {
        match target {
            NavTarget::Login => &self.config.login_route,
            NavTarget::Install => &self.config.install_route,
        }
    }
}

impl<F> SessionHost for SignalHost<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn publish_identity(&self, identity: Option<Identity>) {
        self.identity.replace(identity);
    }

    fn store_access_token(&self, token: Option<String>) {
        access_token::set_access_token(token);
    }

    fn navigate(&self, target: NavTarget) {
        // Redirects replace the entry so "back" does not return to the shell.
        let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
        (self.navigate)(self.route(target), options);
    }

    fn set_state(&self, state: BootstrapState) {
        let current = self.state.get_untracked();
        if !current.can_transition_to(&state) {
            log::warn!("ignoring bootstrap transition {current:?} -> {state:?}");
            return;
        }
        self.state.set(state);
    }
}
