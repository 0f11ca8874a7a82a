use super::*;
use crate::test_support::profile;

fn signed_in(loading: bool) -> AuthState {
    AuthState { user: Some(profile("alice")), loading }
}

fn anonymous(loading: bool) -> AuthState {
    AuthState { user: None, loading }
}

// =============================================================
// decide
// =============================================================

#[test]
fn require_auth_waits_while_loading_regardless_of_user() {
    assert_eq!(decide(GuardPolicy::RequireAuth, &anonymous(true)), GuardDecision::Wait);
    assert_eq!(decide(GuardPolicy::RequireAuth, &signed_in(true)), GuardDecision::Wait);
}

#[test]
fn require_auth_redirects_anonymous_to_login() {
    assert_eq!(decide(GuardPolicy::RequireAuth, &anonymous(false)), GuardDecision::Redirect("/login"));
}

#[test]
fn require_auth_allows_signed_in_user() {
    assert_eq!(decide(GuardPolicy::RequireAuth, &signed_in(false)), GuardDecision::Allow);
}

#[test]
fn require_guest_redirects_signed_in_user_to_profile() {
    assert_eq!(decide(GuardPolicy::RequireGuest, &signed_in(false)), GuardDecision::Redirect("/profile"));
}

#[test]
fn require_guest_allows_anonymous_and_waits_while_loading() {
    assert_eq!(decide(GuardPolicy::RequireGuest, &anonymous(false)), GuardDecision::Allow);
    assert_eq!(decide(GuardPolicy::RequireGuest, &signed_in(true)), GuardDecision::Wait);
}

// =============================================================
// RedirectLatch
// =============================================================

#[test]
fn latch_issues_no_redirect_while_waiting() {
    let mut latch = RedirectLatch::default();
    for _ in 0..3 {
        assert_eq!(latch.observe(decide(GuardPolicy::RequireAuth, &signed_in(true))), None);
    }
}

#[test]
fn latch_redirects_once_per_transition() {
    let mut latch = RedirectLatch::default();
    let redirects: Vec<_> = [
        decide(GuardPolicy::RequireAuth, &anonymous(true)),
        decide(GuardPolicy::RequireAuth, &anonymous(false)),
        decide(GuardPolicy::RequireAuth, &anonymous(false)),
        decide(GuardPolicy::RequireAuth, &anonymous(false)),
    ]
    .into_iter()
    .filter_map(|d| latch.observe(d))
    .collect();
    assert_eq!(redirects, vec!["/login"]);
}

#[test]
fn latch_rearms_after_allow() {
    let mut latch = RedirectLatch::default();
    assert_eq!(latch.observe(GuardDecision::Allow), None);
    assert_eq!(latch.observe(GuardDecision::Redirect("/login")), Some("/login"));
    assert_eq!(latch.observe(GuardDecision::Allow), None);
    assert_eq!(latch.observe(GuardDecision::Redirect("/login")), Some("/login"));
}

#[test]
fn guest_guard_redirects_signed_in_user_exactly_once() {
    let mut latch = RedirectLatch::default();
    let state = signed_in(false);
    let first = latch.observe(decide(GuardPolicy::RequireGuest, &state));
    let second = latch.observe(decide(GuardPolicy::RequireGuest, &state));
    assert_eq!((first, second), (Some("/profile"), None));
}

// =============================================================
// guard_view / redirect_options
// =============================================================

#[test]
fn placeholder_until_first_allow() {
    assert_eq!(guard_view(GuardDecision::Wait, false), GuardView::Placeholder);
    assert_eq!(guard_view(GuardDecision::Redirect("/login"), false), GuardView::Placeholder);
    assert_eq!(guard_view(GuardDecision::Allow, false), GuardView::Content);
}

#[test]
fn allowed_content_stays_mounted_while_loading() {
    assert_eq!(guard_view(GuardDecision::Wait, true), GuardView::Content);
}

#[test]
fn redirects_replace_history() {
    assert!(redirect_options().replace);
}
