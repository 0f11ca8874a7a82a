//! Placeholder shown while the session or a page's data is resolving.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let text = message.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__text">{text}</span>
        </div>
    }
}
