//! Shared fixtures for unit tests: a scripted backend and profile builders.

use std::collections::VecDeque;
use std::sync::Mutex;

use futures::channel::oneshot;

use crate::error::{ClientError, FieldErrors};
use crate::net::api::AuthBackend;
use crate::net::types::{Credentials, LoginResponse, ProfileUpdate, RegisteredUser, RegistrationForm, User, UserProfile};

pub(crate) fn profile(username: &str) -> UserProfile {
    UserProfile {
        user: User {
            id: format!("id-{username}"),
            email: format!("{username}@example.com"),
            username: username.to_owned(),
        },
        bio: None,
        profile_picture: None,
        affiliation: None,
    }
}

pub(crate) fn unauthorized() -> ClientError {
    ClientError::Rejected {
        status: 401,
        fields: FieldErrors::from_value(&serde_json::json!({ "detail": "Authentication credentials were not provided." })),
    }
}

pub(crate) fn rejected(body: serde_json::Value) -> ClientError {
    ClientError::Rejected { status: 400, fields: FieldErrors::from_value(&body) }
}

/// Backend double that records every call and replays scripted outcomes.
///
/// `current_user` pops from `profiles`; once empty it answers 401. When
/// `profile_gate` is set, the next `current_user` call takes it and waits
/// for the sender to fire before popping.
#[derive(Default)]
pub(crate) struct MockBackend {
    pub calls: Mutex<Vec<&'static str>>,
    pub profiles: Mutex<VecDeque<Result<UserProfile, ClientError>>>,
    pub login_error: Mutex<Option<ClientError>>,
    pub logout_error: Mutex<Option<ClientError>>,
    pub verify_error: Mutex<Option<ClientError>>,
    pub refresh_error: Mutex<Option<ClientError>>,
    pub register_error: Mutex<Option<ClientError>>,
    pub update_error: Mutex<Option<ClientError>>,
    pub updates: Mutex<Vec<ProfileUpdate>>,
    pub profile_gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl MockBackend {
    pub fn with_profiles(profiles: Vec<Result<UserProfile, ClientError>>) -> Self {
        Self { profiles: Mutex::new(profiles.into()), ..Self::default() }
    }

    /// Hold the next `current_user` call until the returned sender fires.
    pub fn gate_profile(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.profile_gate.lock().unwrap() = Some(gate);
        release
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str, outcome: &Mutex<Option<ClientError>>) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        outcome.lock().unwrap().clone().map_or(Ok(()), Err)
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for MockBackend {
    async fn register(&self, form: &RegistrationForm) -> Result<RegisteredUser, ClientError> {
        self.record("register", &self.register_error)?;
        Ok(RegisteredUser { user: format!("id-{}", form.username) })
    }

    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        self.record("login", &self.login_error)?;
        Ok(serde_json::json!({ "detail": "Login successful" }))
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.record("logout", &self.logout_error)
    }

    async fn verify(&self) -> Result<(), ClientError> {
        self.record("verify", &self.verify_error)
    }

    async fn refresh(&self) -> Result<(), ClientError> {
        self.record("refresh", &self.refresh_error)
    }

    async fn current_user(&self) -> Result<UserProfile, ClientError> {
        self.calls.lock().unwrap().push("current_user");
        let gate = self.profile_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.profiles.lock().unwrap().pop_front().unwrap_or_else(|| Err(unauthorized()))
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ClientError> {
        self.record("update_profile", &self.update_error)?;
        self.updates.lock().unwrap().push(update.clone());
        Ok(())
    }
}
