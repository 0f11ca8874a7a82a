//! Login page with email + password.
//!
//! On success the guest-only guard sees the new session and redirects to the
//! profile page, so this page never navigates itself.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Credentials;
use crate::state::session::SessionStore;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
const MISSING_CREDENTIALS_MESSAGE: &str = "Enter your email and password.";

fn validate_login_input(identifier: &str, secret: &str) -> Result<Credentials, &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || secret.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok(Credentials { identifier: identifier.to_owned(), secret: secret.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let identifier = RwSignal::new(String::new());
    let secret = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&identifier.get_untracked(), &secret.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let session = session.clone();
        leptos::task::spawn_local(async move {
            match session.login(credentials).await {
                Ok(_) => secret.set(String::new()),
                Err(e) => error.set(e.user_message(LOGIN_FAILED_MESSAGE)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        prop:value=move || secret.get()
                        on:input=move |ev| secret.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-error">{move || error.get()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
