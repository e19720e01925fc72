//! Session bootstrap: one silent refresh per application mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the shell asks the refresh endpoint whether the session cookie is
//! still good. The reply decides one of four outcomes:
//!
//! - no session (or an unreadable body or token): identity absent, go to login
//! - session, installation incomplete: identity published, go to install
//! - session, installed: identity published, stay on the requested view
//! - request rejected or timed out: `Failed`, the shell offers a retry
//!
//! ORDERING
//! ========
//! [`apply`] writes identity, then the access token, then navigation, and
//! moves the bootstrap state last. Anything reacting to `Ready` therefore
//! already sees the final identity for the pass.
//!
//! CANCELLATION
//! ============
//! Every pass holds a [`PassTicket`]. Unmounting the shell or starting a new
//! pass bumps the shared generation, and a settlement whose ticket is no
//! longer current is dropped without touching any state.

#[cfg(test)]
#[path = "bootstrapper_test.rs"]
mod bootstrapper_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::auth::claims;
use crate::net::types::{RefreshReply, RefreshTokenResponse, STATUS_NO_SESSION, TransportError};
use crate::state::bootstrap::{BootstrapFailure, BootstrapState};
use crate::state::identity::Identity;

/// Performs the refresh request. Implementations must send the ambient
/// session cookie and no body.
#[allow(async_fn_in_trait)]
pub trait RefreshTransport {
    async fn refresh(&self) -> Result<RefreshReply, TransportError>;
}

/// Where the session layer writes its results.
pub trait SessionHost {
    fn publish_identity(&self, identity: Option<Identity>);
    fn store_access_token(&self, token: Option<String>);
    fn navigate(&self, target: NavTarget);
    fn set_state(&self, state: BootstrapState);
}

/// Well-known redirect destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Login,
    Install,
}

/// What the refresh reply says about the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Unauthenticated,
    Authenticated { access_token: String, is_installed: bool },
}

/// Everything one pass will write, decided before any write happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    SignedOut,
    SignedIn { identity: Identity, access_token: String, navigate: Option<NavTarget> },
    Failed(BootstrapFailure),
}

/// Result of driving one pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PassOutcome {
    Applied(Resolution),
    /// The pass was superseded or its shell unmounted before settlement.
    Discarded,
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Interpret the HTTP reply. Only 400 means "no session"; every other
/// status is expected to carry a refresh body, and a body that does not
/// parse reads as signed out.
pub fn classify_reply(reply: &RefreshReply) -> SessionOutcome {
    if reply.status == STATUS_NO_SESSION {
        return SessionOutcome::Unauthenticated;
    }
    match RefreshTokenResponse::parse(&reply.body) {
        Ok(body) => SessionOutcome::Authenticated { access_token: body.access_token, is_installed: body.is_installed },
        Err(e) => {
            log::warn!("refresh reply (status {}) has an unexpected body: {e}", reply.status);
            SessionOutcome::Unauthenticated
        }
    }
}

/// Turn the transport result into the writes for this pass.
pub fn resolve(result: Result<RefreshReply, TransportError>) -> Resolution {
    let reply = match result {
        Ok(reply) => reply,
        Err(TransportError::Timeout) => return Resolution::Failed(BootstrapFailure::Timeout),
        Err(TransportError::Network(message)) => return Resolution::Failed(BootstrapFailure::Network(message)),
    };

    match classify_reply(&reply) {
        SessionOutcome::Unauthenticated => Resolution::SignedOut,
        SessionOutcome::Authenticated { access_token, is_installed } => match claims::decode(&access_token) {
            Ok(claims) => Resolution::SignedIn {
                identity: Identity::from_claims(&claims),
                access_token,
                navigate: (!is_installed).then_some(NavTarget::Install),
            },
            Err(e) => {
                log::warn!("access token could not be decoded, treating as signed out: {e}");
                Resolution::SignedOut
            }
        },
    }
}

/// Write `resolution` through `host`. The state change is always last.
pub fn apply<H: SessionHost>(resolution: &Resolution, host: &H) {
    match resolution {
        Resolution::SignedOut => {
            host.publish_identity(None);
            host.store_access_token(None);
            host.navigate(NavTarget::Login);
            host.set_state(BootstrapState::Ready);
        }
        Resolution::SignedIn { identity, access_token, navigate } => {
            host.publish_identity(Some(identity.clone()));
            host.store_access_token(Some(access_token.clone()));
            if let Some(target) = navigate {
                host.navigate(*target);
            }
            host.set_state(BootstrapState::Ready);
        }
        Resolution::Failed(failure) => {
            host.publish_identity(None);
            host.store_access_token(None);
            host.set_state(BootstrapState::Failed(failure.clone()));
        }
    }
}

// =============================================================================
// PASS GENERATIONS
// =============================================================================

/// Shared generation counter for bootstrap passes.
#[derive(Clone, Debug, Default)]
pub struct PassGuard {
    generation: Arc<AtomicU64>,
}

impl PassGuard {
    /// Start a new pass, superseding any pass still in flight.
    pub fn begin(&self) -> PassTicket {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        PassTicket { generation, current: Arc::clone(&self.generation) }
    }

    /// Invalidate every outstanding ticket.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }
}

#[derive(Debug)]
pub struct PassTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl PassTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Relaxed) == self.generation
    }
}

// =============================================================================
// DRIVER
// =============================================================================

/// Drive one pass: request, then resolve and apply unless superseded.
pub async fn run_pass<T, H>(transport: &T, host: &H, ticket: PassTicket) -> PassOutcome
where
    T: RefreshTransport,
    H: SessionHost,
{
    log::debug!("session bootstrap pass {} started", ticket.generation());
    let result = transport.refresh().await;

    if !ticket.is_current() {
        log::debug!("session bootstrap pass {} settled after cancellation; discarded", ticket.generation());
        return PassOutcome::Discarded;
    }

    let resolution = resolve(result);
    match &resolution {
        Resolution::SignedOut => log::info!("no active session"),
        Resolution::SignedIn { identity, navigate, .. } => {
            log::info!("session restored for {} ({})", identity.id, identity.org_role);
            if navigate.is_some() {
                log::info!("installation incomplete");
            }
        }
        Resolution::Failed(failure) => log::warn!("session bootstrap failed: {failure}"),
    }
    apply(&resolution, host);
    PassOutcome::Applied(resolution)
}

/// Owns the transport and the pass generations for one mounted shell.
/// Clones share the same generations.
#[derive(Clone, Debug)]
pub struct Bootstrapper<T> {
    transport: T,
    guard: PassGuard,
}

impl<T: RefreshTransport> Bootstrapper<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, guard: PassGuard::default() }
    }

    /// Handle used to cancel in-flight passes when the shell unmounts.
    pub fn guard(&self) -> PassGuard {
        self.guard.clone()
    }

    pub async fn run<H: SessionHost>(&self, host: &H) -> PassOutcome {
        let ticket = self.guard.begin();
        run_pass(&self.transport, host, ticket).await
    }

    /// Start a fresh pass after a failure. Returns `None` without touching
    /// anything when `current` is not `Failed`.
    pub async fn retry<H: SessionHost>(&self, host: &H, current: &BootstrapState) -> Option<PassOutcome> {
        if !current.can_retry() {
            log::debug!("ignoring retry in state {current:?}");
            return None;
        }
        host.set_state(BootstrapState::Loading);
        Some(self.run(host).await)
    }
}
