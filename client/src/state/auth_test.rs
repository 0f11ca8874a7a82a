use super::*;
use crate::test_support::profile;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading_without_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Derived fields
// =============================================================

#[test]
fn is_authenticated_tracks_user_presence() {
    let state = AuthState { user: Some(profile("alice")), loading: false };
    assert!(state.is_authenticated());
    assert_eq!(state.username(), Some("alice"));
}
