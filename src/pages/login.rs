//! Login destination for signed-out users.

use leptos::prelude::*;

use crate::config::HOME_ROUTE;
use crate::state::identity::use_identity_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let identity = use_identity_context();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Citadel"</h1>
                <Show
                    when=move || identity.read().is_some()
                    fallback=|| view! { <p class="login-card__subtitle">"Sign in to continue."</p> }
                >
                    <p class="login-card__subtitle">"You are already signed in."</p>
                    <a href=HOME_ROUTE class="login-button">"Continue"</a>
                </Show>
            </div>
        </div>
    }
}
