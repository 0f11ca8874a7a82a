//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::guards::{RequireAuth, RequireGuest};
use crate::components::layout::Layout;
use crate::config::ClientConfig;
use crate::net::api::HttpBackend;
use crate::pages::{
    home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::reconcile::RecoveryPolicy;
use crate::state::session::SessionStore;

/// Root application component.
///
/// Builds the session store, starts reconciliation, and sets up client-side
/// routing with guest-only and signed-in-only route groups.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let backend = Arc::new(HttpBackend::new(config.clone()));
    let session = SessionStore::new(backend, RecoveryPolicy::default());

    provide_context(config);
    provide_context(session.clone());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        session.initialize().await;
    });
    #[cfg(not(feature = "csr"))]
    drop(session);

    view! {
        <Title text="Campus"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <ParentRoute path=StaticSegment("") view=RequireGuest>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("") view=RequireAuth>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                    </ParentRoute>
                </Routes>
            </Layout>
        </Router>
    }
}
