//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Only `SessionStore` writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl AuthState {
    /// State before startup reconciliation has resolved. Guards wait on it.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|p| p.user.username.as_str())
    }
}
