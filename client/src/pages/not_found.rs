//! Fallback for unmatched routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <A href="/">"Back to home"</A>
        </section>
    }
}
