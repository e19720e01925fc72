//! Default authenticated view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached when bootstrap restored an installed session. Shows who is signed
//! in and offers sign-out; redirects to `/login` if the identity is cleared.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::SessionConfig;
use crate::session::host::SignalHost;
use crate::state::bootstrap::BootstrapState;
use crate::state::identity::use_identity_context;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let identity = use_identity_context();
    let state = expect_context::<RwSignal<BootstrapState>>();
    let config = expect_context::<SessionConfig>();
    let navigate = use_navigate();

    install_unauth_redirect(state, identity, config.login_route.clone(), navigate.clone());

    let host = SignalHost::new(identity, state, navigate, config);
    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let host = host.clone();
            leptos::task::spawn_local(async move {
                crate::session::sign_out::sign_out(host.config(), &host).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &host;
        }
    };

    view! {
        <div class="home-page">
            {move || {
                identity
                    .read()
                    .map(|user| {
                        view! {
                            <p class="home-page__identity">
                                "Signed in as " <span>{user.id.clone()}</span> " (" {user.role().as_str()} ")"
                            </p>
                        }
                    })
            }}
            <button class="home-page__sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
        </div>
    }
}
