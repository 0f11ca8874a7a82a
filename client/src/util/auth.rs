//! Route-guard policy shared by the guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected and guest-only routes must apply identical redirect behavior.
//! The decision is a pure function of `AuthState`; the components in
//! `components::guards` only wire it to the router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const PROFILE_ROUTE: &str = "/profile";
pub const HOME_ROUTE: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Only signed-in users may see the nested routes.
    RequireAuth,
    /// Only anonymous visitors may see the nested routes (login, register).
    RequireGuest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet; make no navigation decision.
    Wait,
    Allow,
    Redirect(&'static str),
}

/// What a guard renders in place of its nested routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Placeholder,
    Content,
}

pub fn decide(policy: GuardPolicy, state: &AuthState) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    match (policy, state.is_authenticated()) {
        (GuardPolicy::RequireAuth, false) => GuardDecision::Redirect(LOGIN_ROUTE),
        (GuardPolicy::RequireGuest, true) => GuardDecision::Redirect(PROFILE_ROUTE),
        _ => GuardDecision::Allow,
    }
}

/// Mount policy: the placeholder is shown while waiting only until the
/// guard has allowed once. After that, content stays mounted through later
/// loading phases (login in progress, explicit refresh) so the form that
/// started them is not torn down. Redirects still wait for loading to end.
pub fn guard_view(decision: GuardDecision, allowed_before: bool) -> GuardView {
    match decision {
        GuardDecision::Allow => GuardView::Content,
        GuardDecision::Wait | GuardDecision::Redirect(_) if allowed_before => GuardView::Content,
        GuardDecision::Wait | GuardDecision::Redirect(_) => GuardView::Placeholder,
    }
}

/// Turns a stream of decisions into at most one navigation per redirect.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedirectLatch {
    last: Option<GuardDecision>,
}

impl RedirectLatch {
    /// Returns the target path only when `decision` newly became a redirect.
    pub fn observe(&mut self, decision: GuardDecision) -> Option<&'static str> {
        let previous = self.last.replace(decision);
        match decision {
            GuardDecision::Redirect(path) if previous != Some(decision) => Some(path),
            _ => None,
        }
    }
}

/// Navigation options for guard redirects: replace the history entry so the
/// back button never returns to a route the guard rejected.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever `policy` newly rejects the current session.
pub fn install_guard_redirect<F>(state: ReadSignal<AuthState>, policy: GuardPolicy, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut latch = RedirectLatch::default();
    Effect::new(move || {
        let decision = decide(policy, &state.get());
        if let Some(path) = latch.observe(decision) {
            navigate(path, redirect_options());
        }
    });
}
