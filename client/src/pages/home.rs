//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();
    let greeting = move || {
        state
            .get()
            .username()
            .map_or_else(|| "Welcome to Campus".to_owned(), |name| format!("Welcome back, {name}"))
    };

    view! {
        <section class="home">
            <h1 class="home__title">{greeting}</h1>
            <p class="home__subtitle">"Courses, groups, and materials in one place."</p>
            <Show
                when=move || state.get().is_authenticated()
                fallback=|| view! { <A href="/register" attr:class="home__cta">"Get started"</A> }
            >
                <A href="/profile" attr:class="home__cta">"Go to your profile"</A>
            </Show>
        </section>
    }
}
