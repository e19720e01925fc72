//! Helpers shared by unit tests.

use std::cell::RefCell;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::types::{RefreshReply, TransportError};
use crate::session::bootstrapper::{NavTarget, PassGuard, RefreshTransport, SessionHost};
use crate::state::bootstrap::BootstrapState;
use crate::state::identity::Identity;

/// Build an unsigned three-segment token around `payload`.
pub fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.c2lnbmF0dXJl")
}

/// Token whose claims carry `user_id` and `org_role`.
pub fn token_for(user_id: &str, org_role: &str) -> String {
    token_with_payload(&serde_json::json!({ "userId": user_id, "orgRole": org_role }))
}

/// One write observed by [`RecordingHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Identity(Option<Identity>),
    AccessToken(Option<String>),
    Navigate(NavTarget),
    /// State change plus the identity held at that instant.
    State(BootstrapState, Option<Identity>),
}

/// Host that records every write in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: RefCell<Vec<HostEvent>>,
    identity: RefCell<Option<Identity>>,
}

impl RecordingHost {
    pub fn identity(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<NavTarget> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                HostEvent::Navigate(target) => Some(*target),
                _ => None,
            })
            .collect()
    }

    pub fn last_state(&self) -> Option<BootstrapState> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            HostEvent::State(state, _) => Some(state.clone()),
            _ => None,
        })
    }
}

impl SessionHost for RecordingHost {
    fn publish_identity(&self, identity: Option<Identity>) {
        *self.identity.borrow_mut() = identity.clone();
        self.events.borrow_mut().push(HostEvent::Identity(identity));
    }

    fn store_access_token(&self, token: Option<String>) {
        self.events.borrow_mut().push(HostEvent::AccessToken(token));
    }

    fn navigate(&self, target: NavTarget) {
        self.events.borrow_mut().push(HostEvent::Navigate(target));
    }

    fn set_state(&self, state: BootstrapState) {
        let identity = self.identity();
        self.events.borrow_mut().push(HostEvent::State(state, identity));
    }
}

/// Transport returning a fixed result, optionally cancelling a guard while
/// the request is "in flight".
pub struct ScriptedTransport {
    pub result: Result<RefreshReply, TransportError>,
    pub cancel_during_request: Option<PassGuard>,
    pub calls: RefCell<usize>,
}

impl ScriptedTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::with_result(Ok(RefreshReply { status, body: body.to_owned() }))
    }

    pub fn with_result(result: Result<RefreshReply, TransportError>) -> Self {
        Self { result, cancel_during_request: None, calls: RefCell::new(0) }
    }
}

impl RefreshTransport for ScriptedTransport {
    async fn refresh(&self) -> Result<RefreshReply, TransportError> {
        *self.calls.borrow_mut() += 1;
        if let Some(guard) = &self.cancel_during_request {
            guard.cancel();
        }
        self.result.clone()
    }
}

/// JSON body of a successful refresh.
pub fn refresh_body(access_token: &str, is_installed: bool) -> String {
    serde_json::json!({ "accessToken": access_token, "isInstalled": is_installed }).to_string()
}
