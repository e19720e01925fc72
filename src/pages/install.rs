//! Install destination for signed-in users whose installation is incomplete.

use leptos::prelude::*;

use crate::state::identity::use_identity_context;

#[component]
pub fn InstallPage() -> impl IntoView {
    let identity = use_identity_context();
    let is_admin = move || identity.read().is_some_and(|user| user.is_admin());

    view! {
        <div class="install-page">
            <h1>"Finish setting up Citadel"</h1>
            <Show
                when=is_admin
                fallback=|| view! { <p>"An organization admin needs to complete installation."</p> }
            >
                <p>"Complete the installation to start using your workspace."</p>
            </Show>
        </div>
    }
}
