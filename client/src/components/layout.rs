//! Page chrome: navigation bar with session-aware links, and footer.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionStore;

/// Wraps every route with the navbar and footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar/>
            <main class="layout__main">{children()}</main>
            <footer class="footer">
                <p>"Campus Portal"</p>
            </footer>
        </div>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();
    let signed_in = move || state.get().is_authenticated();
    let resolving = move || state.get().loading;

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Campus"</A>
            <div class="navbar__links">
                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <A href="/login" attr:class="navbar__link">"Login"</A>
                            <A href="/register" attr:class="navbar__link navbar__link--primary">"Register"</A>
                        }
                    }
                >
                    <A href="/profile" attr:class="navbar__link">"Profile"</A>
                    <LogoutButton disabled=Signal::derive(resolving)/>
                </Show>
            </div>
        </nav>
    }
}

/// Signs out immediately; the backend call happens in the background.
#[component]
fn LogoutButton(#[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let on_click = move |_| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
        });
    };

    view! {
        <button class="navbar__logout" type="button" on:click=on_click disabled=move || disabled.get()>
            "Logout"
        </button>
    }
}
