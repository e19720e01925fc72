//! Bootstrap lifecycle of the application shell.
//!
//! `Loading` is the only initial state. `Ready` is terminal for the life of
//! the mounted shell. `Failed` is terminal for a pass; the user may retry,
//! which starts a new pass from `Loading`.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

/// Why a bootstrap pass could not reach a session decision.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapFailure {
    /// The refresh request never completed.
    #[error("could not reach the server: {0}")]
    Network(String),

    /// The refresh request did not settle within the configured timeout.
    #[error("the server took too long to respond")]
    Timeout,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BootstrapState {
    #[default]
    Loading,
    Ready,
    Failed(BootstrapFailure),
}

impl BootstrapState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Only a failed pass may be retried.
    pub fn can_retry(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: &Self) -> bool {
        matches!(
            (self, next),
            (Self::Loading, Self::Ready | Self::Failed(_)) | (Self::Failed(_), Self::Loading)
        )
    }
}
