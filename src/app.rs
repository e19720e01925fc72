//! Root application component with session bootstrap, routing, and context
//! providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::config::SessionConfig;
use crate::net::api::HttpRefreshTransport;
use crate::pages::{home::HomePage, install::InstallPage, login::LoginPage};
use crate::session::bootstrapper::Bootstrapper;
use crate::session::host::SignalHost;
use crate::state::bootstrap::BootstrapState;
use crate::state::identity::{IdentityContext, provide_identity_context, use_identity_context};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the identity context and bootstrap state for the whole tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let identity = IdentityContext::new();
    let bootstrap = RwSignal::new(BootstrapState::default());

    provide_identity_context(identity);
    provide_context(bootstrap);
    provide_context(SessionConfig::from_build_env());

    view! {
        <Title text="Citadel"/>

        <Router>
            <SessionGate/>
        </Router>
    }
}

/// Runs the bootstrap pass and holds back the routes until it settles.
#[component]
fn SessionGate() -> impl IntoView {
    let identity = use_identity_context();
    let state = expect_context::<RwSignal<BootstrapState>>();
    let config = expect_context::<SessionConfig>();
    let navigate = use_navigate();

    let bootstrapper = Bootstrapper::new(HttpRefreshTransport::new(config.clone()));
    let host = SignalHost::new(identity, state, navigate, config);

    #[cfg(feature = "hydrate")]
    {
        let guard = bootstrapper.guard();
        on_cleanup(move || guard.cancel());

        let (bootstrapper, host) = (bootstrapper.clone(), host.clone());
        leptos::task::spawn_local(async move {
            bootstrapper.run(&host).await;
        });
    }

    let on_retry = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let current = state.get_untracked();
            let (bootstrapper, host) = (bootstrapper.clone(), host.clone());
            leptos::task::spawn_local(async move {
                bootstrapper.retry(&host, &current).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&bootstrapper, &host);
        }
    };

    move || match state.get() {
        BootstrapState::Loading => view! { <div class="session-loading">"loading"</div> }.into_any(),
        BootstrapState::Failed(failure) => view! {
            <div class="session-failed">
                <p>{failure.to_string()}</p>
                <button on:click=on_retry.clone()>"Retry"</button>
            </div>
        }
        .into_any(),
        BootstrapState::Ready => view! {
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("install") view=InstallPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        }
        .into_any(),
    }
}
