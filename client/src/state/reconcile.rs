//! Startup reconciliation: decide whether a pre-existing session is valid.
//!
//! DESIGN
//! ======
//! Access credentials are short-lived while the refresh credential outlives
//! them, so a failed profile fetch is followed by a silent
//! verify -> refresh -> re-fetch sequence before giving up. Each step starts
//! only after the previous one resolved.
//!
//! ERROR HANDLING
//! ==============
//! Nothing escapes this module. Every failure resolves to "no session", which
//! is the normal state for anonymous visitors.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use crate::error::ClientError;
use crate::net::api::AuthBackend;
use crate::net::types::UserProfile;

/// How hard reconciliation tries after the first profile fetch fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Verify, refresh, then fetch the profile again.
    #[default]
    VerifyRefresh,
    /// Trust the first profile fetch only.
    Direct,
}

/// Resolve the current user, or `None` when no valid session can be established.
pub async fn reconcile(backend: &dyn AuthBackend, policy: RecoveryPolicy) -> Option<UserProfile> {
    let first_error = match backend.current_user().await {
        Ok(profile) => return Some(profile),
        Err(e) => e,
    };

    if policy == RecoveryPolicy::Direct {
        log_session_invalid(&first_error);
        return None;
    }

    match recover(backend).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            log_session_invalid(&e);
            None
        }
    }
}

async fn recover(backend: &dyn AuthBackend) -> Result<UserProfile, ClientError> {
    backend.verify().await?;
    backend.refresh().await?;
    backend.current_user().await
}

fn log_session_invalid(cause: &ClientError) {
    leptos::logging::log!("{}: {cause}", ClientError::SessionInvalid);
}
