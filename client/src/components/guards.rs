//! Route gates wrapping nested routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used as `ParentRoute` views in `app.rs`. The policy itself lives in
//! `util::auth`; these components subscribe to the session signal, issue
//! redirects, and choose between the placeholder and the nested `Outlet`.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::state::session::SessionStore;
use crate::util::auth::{GuardDecision, GuardPolicy, GuardView, decide, guard_view, install_guard_redirect};

/// Renders nested routes only for signed-in users; otherwise redirects to `/login`.
#[component]
pub fn RequireAuth() -> impl IntoView {
    guarded_outlet(GuardPolicy::RequireAuth)
}

/// Renders nested routes only for anonymous visitors; otherwise redirects to `/profile`.
#[component]
pub fn RequireGuest() -> impl IntoView {
    guarded_outlet(GuardPolicy::RequireGuest)
}

fn guarded_outlet(policy: GuardPolicy) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();
    install_guard_redirect(state, policy, use_navigate());

    let decision = Memo::new(move |_| decide(policy, &state.get()));
    let allowed_before = RwSignal::new(false);
    Effect::new(move || {
        if decision.get() == GuardDecision::Allow {
            allowed_before.set(true);
        }
    });

    let show_content = move || guard_view(decision.get(), allowed_before.get()) == GuardView::Content;
    let placeholder = move || match decision.get() {
        GuardDecision::Redirect(_) => view! { <Loading message="Redirecting..."/> }.into_any(),
        _ => view! { <Loading/> }.into_any(),
    };

    view! {
        <Show when=show_content fallback=placeholder>
            <Outlet/>
        </Show>
    }
}
