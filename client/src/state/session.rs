//! Session store: the single owner of [`AuthState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once in `App` and provided through context. Pages call its
//! operations; guards and components only ever see the read-only signal.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the browser's event loop, so mutations are serialized
//! without locks. The atomics only exist to turn duplicate `initialize`
//! calls from re-rendering components into no-ops and to keep a single
//! reconciliation in flight. Login/logout are not de-duplicated; forms
//! disable their submit buttons while `loading`.
//!
//! Login and reconciliation can overlap. `loading` stays set until every
//! in-flight operation has finished, and a reconciliation only writes its
//! result if no login or logout completed while it was running.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use leptos::prelude::*;

use super::auth::AuthState;
use super::reconcile::{RecoveryPolicy, reconcile};
use crate::error::ClientError;
use crate::net::api::AuthBackend;
use crate::net::types::{Credentials, LoginResponse, RegisteredUser, RegistrationForm, UserProfile};

#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<AuthState>,
    backend: Arc<dyn AuthBackend>,
    policy: RecoveryPolicy,
    initialized: Arc<AtomicBool>,
    reconciling: Arc<AtomicBool>,
    in_flight: Arc<AtomicUsize>,
    /// Bumped whenever login or logout decides the user.
    generation: Arc<AtomicU64>,
}

impl SessionStore {
    /// New store in the pending state: guards wait until `initialize` resolves.
    pub fn new(backend: Arc<dyn AuthBackend>, policy: RecoveryPolicy) -> Self {
        Self {
            state: RwSignal::new(AuthState::pending()),
            backend,
            policy,
            initialized: Arc::new(AtomicBool::new(false)),
            reconciling: Arc::new(AtomicBool::new(false)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Reactive, read-only view of the session.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Current session without subscribing the caller.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn backend(&self) -> Arc<dyn AuthBackend> {
        Arc::clone(&self.backend)
    }

    /// Run startup reconciliation. Only the first call per store does anything.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::AcqRel) {
            return;
        }
        self.run_reconciliation().await;
    }

    /// Re-check the session with the backend, e.g. after credentials may have
    /// rotated. Returns the resolved user, or the current one if another
    /// reconciliation is already in flight.
    pub async fn refresh(&self) -> Option<UserProfile> {
        match self.run_reconciliation().await {
            Some(resolved) => resolved,
            None => self.state.get_untracked().user,
        }
    }

    /// Returns `None` when suppressed because a reconciliation is in flight.
    async fn run_reconciliation(&self) -> Option<Option<UserProfile>> {
        if self.reconciling.swap(true, Ordering::AcqRel) {
            return None;
        }
        self.begin();
        let started = self.generation.load(Ordering::Acquire);

        let user = reconcile(self.backend.as_ref(), self.policy).await;

        let stale = self.generation.load(Ordering::Acquire) != started;
        if stale {
            leptos::logging::log!("discarding reconciliation result: session changed while it ran");
        } else {
            self.state.update(|s| s.user.clone_from(&user));
        }
        self.finish();
        self.reconciling.store(false, Ordering::Release);
        Some(if stale { self.state.get_untracked().user } else { user })
    }

    fn begin(&self) {
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        self.state.update(|s| s.loading = true);
    }

    fn finish(&self) {
        let remaining = self.in_flight.fetch_sub(1, Ordering::AcqRel).saturating_sub(1);
        self.state.update(|s| s.loading = remaining > 0);
    }

    fn bump_generation(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Log in, then load the profile of the newly authenticated user.
    ///
    /// `credentials` are consumed and dropped when the call completes.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` with the backend's field messages when
    /// either request is rejected, or `NetworkFailure` on transport errors.
    /// The stored user is left unchanged on failure.
    pub async fn login(&self, credentials: Credentials) -> Result<LoginResponse, ClientError> {
        self.begin();

        let result = self.login_then_fetch(&credentials).await;
        drop(credentials);

        if let Ok((_, profile)) = &result {
            self.bump_generation();
            self.state.update(|s| s.user = Some(profile.clone()));
        }
        self.finish();
        result.map(|(response, _)| response)
    }

    async fn login_then_fetch(&self, credentials: &Credentials) -> Result<(LoginResponse, UserProfile), ClientError> {
        let response = self
            .backend
            .login(credentials)
            .await
            .map_err(ClientError::into_auth_failure)?;
        let profile = self
            .backend
            .current_user()
            .await
            .map_err(ClientError::into_auth_failure)?;
        Ok((response, profile))
    }

    /// Sign out locally, then tell the backend. Backend failures are logged only.
    pub async fn logout(&self) {
        self.bump_generation();
        self.state.update(|s| s.user = None);
        if let Err(e) = self.backend.logout().await {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }

    /// Create an account. The session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Validation` without any network call when the passwords
    /// differ, otherwise `AuthenticationFailed` with field messages.
    pub async fn register(&self, form: RegistrationForm) -> Result<RegisteredUser, ClientError> {
        form.check_passwords()?;
        self.backend
            .register(&form)
            .await
            .map_err(ClientError::into_auth_failure)
    }

    /// Swap in a freshly saved profile for the signed-in user.
    pub fn replace_profile(&self, profile: UserProfile) {
        self.state.update(|s| {
            if s.user.is_some() {
                s.user = Some(profile);
            }
        });
    }
}
