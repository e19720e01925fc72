use super::*;

#[test]
fn default_is_loading() {
    let state = BootstrapState::default();
    assert_eq!(state, BootstrapState::Loading);
    assert!(!state.is_ready());
    assert!(!state.can_retry());
}

#[test]
fn loading_settles_to_ready_or_failed() {
    let loading = BootstrapState::Loading;
    assert!(loading.can_transition_to(&BootstrapState::Ready));
    assert!(loading.can_transition_to(&BootstrapState::Failed(BootstrapFailure::Timeout)));
    assert!(!loading.can_transition_to(&BootstrapState::Loading));
}

#[test]
fn ready_is_terminal() {
    let ready = BootstrapState::Ready;
    assert!(!ready.can_retry());
    assert!(!ready.can_transition_to(&BootstrapState::Loading));
    assert!(!ready.can_transition_to(&BootstrapState::Failed(BootstrapFailure::Timeout)));
}

#[test]
fn failed_can_only_retry() {
    let failed = BootstrapState::Failed(BootstrapFailure::Network("offline".to_owned()));
    assert!(failed.can_retry());
    assert!(failed.can_transition_to(&BootstrapState::Loading));
    assert!(!failed.can_transition_to(&BootstrapState::Ready));
}

#[test]
fn failure_messages_are_user_facing() {
    assert_eq!(BootstrapFailure::Network("offline".to_owned()).to_string(), "could not reach the server: offline");
    assert_eq!(BootstrapFailure::Timeout.to_string(), "the server took too long to respond");
}
