//! Registration page.
//!
//! Password confirmation is checked before anything is sent. Backend
//! rejections show the first field message (email, then username, then
//! password). A successful registration returns to the home page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegistrationForm;
use crate::state::session::SessionStore;
use crate::util::auth::HOME_ROUTE;

pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

fn validate_registration_input(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegistrationForm, String> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE.to_owned());
    }
    let form = RegistrationForm {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
    };
    form.check_passwords().map_err(|e| e.user_message(REGISTRATION_FAILED_MESSAGE))?;
    Ok(form)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let form = match validate_registration_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(form) => form,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        busy.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register(form).await {
                Ok(_) => navigate(HOME_ROUTE, NavigateOptions::default()),
                Err(e) => error.set(e.user_message(REGISTRATION_FAILED_MESSAGE)),
            }
            busy.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, name: &'static str, value: RwSignal<String>| {
        view! {
            <label class="auth-label">
                <span>{label}</span>
                <input
                    class="auth-input"
                    type=kind
                    name=name
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {field("Username", "text", "username", username)}
                    {field("Email", "email", "email", email)}
                    {field("Password", "password", "password", password)}
                    {field("Confirm password", "password", "confirm_password", confirm_password)}
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-error">{move || error.get()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
