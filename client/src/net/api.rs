//! REST API client for the account backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, with credentials
//! included, a JSON `Accept` header, and a per-request timeout that aborts the
//! underlying fetch.
//! Native builds (tests, tooling): every call fails with `NetworkFailure`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ClientError::Rejected` carrying the backend's
//! field errors; transport problems and timeouts become `NetworkFailure`.
//! Callers decide how to narrow or swallow them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{Credentials, LoginResponse, ProfileUpdate, RegisteredUser, RegistrationForm, UserProfile};
use crate::config::ClientConfig;
use crate::error::{ClientError, FieldErrors};

pub const REGISTER_PATH: &str = "user/register/";
pub const LOGIN_PATH: &str = "user/login/";
pub const LOGOUT_PATH: &str = "user/logout/";
pub const VERIFY_PATH: &str = "user/token/verify/";
pub const REFRESH_PATH: &str = "user/token/refresh/";
pub const PROFILE_PATH: &str = "user/profile/";

/// Account backend operations used by the session store and profile page.
///
/// Futures are `?Send`: in the browser they wrap JS promises and run on the
/// single UI thread.
#[async_trait::async_trait(?Send)]
pub trait AuthBackend: Send + Sync {
    /// Create an account via `POST /user/register/`.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` with per-field messages when validation fails.
    async fn register(&self, form: &RegistrationForm) -> Result<RegisteredUser, ClientError>;

    /// Start a session via `POST /user/login/`. The session travels in cookies.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` for bad credentials, `NetworkFailure` on transport errors.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError>;

    /// End the session via `POST /user/logout/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not be reached or refused.
    async fn logout(&self) -> Result<(), ClientError>;

    /// Check the access credential via `POST /user/token/verify/`.
    ///
    /// # Errors
    ///
    /// Returns an error when the access credential is missing or expired.
    async fn verify(&self) -> Result<(), ClientError>;

    /// Mint a new access credential via `POST /user/token/refresh/`.
    ///
    /// # Errors
    ///
    /// Returns an error when the refresh credential is missing or expired.
    async fn refresh(&self) -> Result<(), ClientError>;

    /// Fetch the signed-in user's profile via `GET /user/profile/`.
    ///
    /// # Errors
    ///
    /// Returns an error when no valid session exists.
    async fn current_user(&self) -> Result<UserProfile, ClientError>;

    /// Apply a partial update via `PATCH /user/profile/`.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` when the backend refuses the update.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ClientError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
}

#[derive(Debug)]
enum Body {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(&'static str, String)>),
}

/// Browser HTTP implementation of [`AuthBackend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn send(&self, method: Method, path: &str, body: Body) -> Result<serde_json::Value, ClientError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(path);
            let result = dispatch(self.config.request_timeout, |signal| build_request(method, &url, body, signal)).await;
            if let Err(e) = &result {
                leptos::logging::warn!("api error: {method:?} {path}: {e}");
            }
            result
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body, &self.config);
            Err(ClientError::NetworkFailure("not available outside the browser".to_owned()))
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for HttpBackend {
    async fn register(&self, form: &RegistrationForm) -> Result<RegisteredUser, ClientError> {
        let value = self.send(Method::Post, REGISTER_PATH, Body::Json(to_json(form)?)).await?;
        decode(value)
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        self.send(Method::Post, LOGIN_PATH, Body::Json(to_json(credentials)?)).await
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.send(Method::Post, LOGOUT_PATH, Body::Empty).await.map(drop)
    }

    async fn verify(&self) -> Result<(), ClientError> {
        self.send(Method::Post, VERIFY_PATH, Body::Empty).await.map(drop)
    }

    async fn refresh(&self) -> Result<(), ClientError> {
        self.send(Method::Post, REFRESH_PATH, Body::Empty).await.map(drop)
    }

    async fn current_user(&self) -> Result<UserProfile, ClientError> {
        let value = self.send(Method::Get, PROFILE_PATH, Body::Empty).await?;
        decode(value)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ClientError> {
        let body = if update.is_multipart() { Body::Form(update.form_fields()) } else { Body::Json(to_json(update)?) };
        self.send(Method::Patch, PROFILE_PATH, body).await.map(drop)
    }
}

fn to_json<T: serde::Serialize>(payload: &T) -> Result<serde_json::Value, ClientError> {
    serde_json::to_value(payload).map_err(|e| ClientError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Parse a response body. Empty bodies (logout, verify) become `Null`.
fn parse_body(text: &str) -> Result<serde_json::Value, ClientError> {
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Map a completed HTTP exchange onto the client error taxonomy.
pub(crate) fn classify_response(status: u16, text: &str) -> Result<serde_json::Value, ClientError> {
    if (200..300).contains(&status) {
        parse_body(text)
    } else {
        Err(ClientError::Rejected { status, fields: FieldErrors::from_body(text) })
    }
}

#[cfg(feature = "csr")]
fn build_request(
    method: Method,
    url: &str,
    body: Body,
    signal: &web_sys::AbortSignal,
) -> Result<gloo_net::http::Request, ClientError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Patch => Request::patch(url),
    }
    .header("Accept", "application/json")
    .credentials(web_sys::RequestCredentials::Include)
    .abort_signal(Some(signal));

    let request = match body {
        Body::Empty => builder.build(),
        Body::Json(value) => builder.json(&value),
        Body::Form(fields) => {
            let form = web_sys::FormData::new().map_err(js_error)?;
            for (name, value) in &fields {
                form.append_with_str(name, value).map_err(js_error)?;
            }
            builder.body(form)
        }
    };
    request.map_err(|e| ClientError::NetworkFailure(e.to_string()))
}

/// Send a request built by `build`, aborting it if `timeout` elapses first.
#[cfg(feature = "csr")]
pub(crate) async fn dispatch<F>(timeout: std::time::Duration, build: F) -> Result<serde_json::Value, ClientError>
where
    F: FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, ClientError>,
{
    use futures::future::{Either, select};

    let controller = web_sys::AbortController::new().map_err(js_error)?;
    let request = build(&controller.signal())?;

    let send = Box::pin(request.send());
    let timer = Box::pin(gloo_timers::future::sleep(timeout));
    let response = match select(send, timer).await {
        Either::Left((result, _)) => result.map_err(|e| ClientError::NetworkFailure(e.to_string()))?,
        Either::Right(((), _)) => {
            controller.abort();
            return Err(ClientError::NetworkFailure(timed_out_message(timeout)));
        }
    };

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::NetworkFailure(e.to_string()))?;
    classify_response(status, &text)
}

#[cfg(feature = "csr")]
pub(crate) fn js_error(value: wasm_bindgen::JsValue) -> ClientError {
    ClientError::NetworkFailure(format!("{value:?}"))
}

#[cfg(any(test, feature = "csr"))]
fn timed_out_message(timeout: std::time::Duration) -> String {
    format!("request timed out after {}s", timeout.as_secs())
}
