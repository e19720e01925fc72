//! Explicit sign-out.

use super::bootstrapper::{NavTarget, SessionHost};
use crate::config::SessionConfig;
use crate::net::api;

/// End the server session, then drop the local credential and identity and
/// send the user to login. Local state is cleared even if the server call
/// fails.
pub async fn sign_out<H: SessionHost>(config: &SessionConfig, host: &H) {
    api::logout(config).await;
    host.store_access_token(None);
    host.publish_identity(None);
    host.navigate(NavTarget::Login);
    log::info!("signed out");
}
