//! REST calls to the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending the
//! session cookie.
//! Server-side (SSR): stubs that fail or no-op, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures come back as [`TransportError`] values. Interpreting
//! HTTP statuses is left to the session bootstrapper.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{RefreshReply, TransportError};
#[cfg(any(test, feature = "hydrate"))]
use super::types::STATUS_NO_SESSION;
use crate::config::SessionConfig;
use crate::session::bootstrapper::RefreshTransport;

/// The body of a "no session" reply is never parsed, so it is not read.
#[cfg(any(test, feature = "hydrate"))]
fn should_read_body(status: u16) -> bool {
    status != STATUS_NO_SESSION
}

/// Refresh transport backed by the browser's fetch.
#[derive(Clone, Debug)]
pub struct HttpRefreshTransport {
    config: SessionConfig,
}

impl HttpRefreshTransport {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }
}

impl RefreshTransport for HttpRefreshTransport {
    async fn refresh(&self) -> Result<RefreshReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};

            let request = std::pin::pin!(post_refresh(&self.config.refresh_path));
            let timeout = std::pin::pin!(gloo_timers::future::sleep(self.config.refresh_timeout));
            match select(request, timeout).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(TransportError::Timeout),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.config;
            Err(TransportError::Network("not available on server".to_owned()))
        }
    }
}

/// `POST` the refresh endpoint with the ambient session cookie and no body.
#[cfg(feature = "hydrate")]
async fn post_refresh(path: &str) -> Result<RefreshReply, TransportError> {
    let resp = gloo_net::http::Request::post(path)
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;
    let status = resp.status();
    if !should_read_body(status) {
        return Ok(RefreshReply { status, body: String::new() });
    }
    let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
    Ok(RefreshReply { status, body })
}

/// End the server session by calling `POST /auth/logout`. Best effort.
pub async fn logout(config: &SessionConfig) {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(&config.logout_path)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("logout request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}
