//! Profile page: view and edit the signed-in user's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RequireAuth`. Text fields are saved with a JSON patch;
//! picture changes go to the image host first and then patch the stored URL.
//! Saved profiles are pushed back into `SessionStore` so the navbar and home
//! page stay current.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::config::ClientConfig;
use crate::state::profile::{ProfileState, save_profile};
use crate::state::session::SessionStore;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = StoredValue::new(expect_context::<SessionStore>());
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let state = RwSignal::new(ProfileState::loading());

    let backend = session.get_value().backend();
    leptos::task::spawn_local(async move {
        match backend.current_user().await {
            Ok(profile) => state.update(|s| s.apply(profile)),
            Err(e) => state.update(|s| s.fail(&e)),
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = state.get_untracked();
        if !current.can_save() {
            return;
        }
        let update = current.draft_update();
        state.update(|s| s.loading = true);

        let session = session.get_value();
        leptos::task::spawn_local(async move {
            match save_profile(session.backend().as_ref(), &update).await {
                Ok(profile) => {
                    session.replace_profile(profile.clone());
                    state.update(|s| s.apply(profile));
                }
                Err(e) => state.update(|s| s.fail(&e)),
            }
        });
    };

    let on_picture = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use crate::net::assets::HostedAssetUploader;
            use crate::state::profile::change_picture;

            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if state.get_untracked().uploading {
                return;
            }
            state.update(|s| s.uploading = true);

            let session = session.get_value();
            let config = config.get_value();
            let uploader = HostedAssetUploader::new(config.asset_host, config.request_timeout);
            leptos::task::spawn_local(async move {
                match change_picture(session.backend().as_ref(), &uploader, file).await {
                    Ok(profile) => {
                        session.replace_profile(profile.clone());
                        state.update(|s| s.apply(profile));
                    }
                    Err(e) => state.update(|s| s.fail(&e)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, config);
        }
    };

    let toggle_editing = move |_: leptos::ev::MouseEvent| state.update(ProfileState::toggle_editing);
    let editing = move || state.get().editing;
    let has_profile = move || state.get().profile.is_some();
    let username = move || state.get().profile.map(|p| p.user.username).unwrap_or_default();
    let email = move || state.get().profile.map(|p| p.user.email).unwrap_or_default();
    let picture = move || state.get().profile.and_then(|p| p.profile_picture);
    let initial = move || state.get().profile.map(|p| p.initial()).unwrap_or_default();

    view! {
        <section class="profile-page">
            <div class="profile-card">
                <header class="profile-card__header">
                    <h3>"Profile Settings"</h3>
                </header>

                <Show when=move || state.get().error.is_some()>
                    <div class="profile-card__error">{move || state.get().error.unwrap_or_default()}</div>
                </Show>

                <Show when=has_profile fallback=move || state.get().loading.then(|| view! { <Loading/> })>
                    <div class="profile-card__avatar">
                        {move || match picture() {
                            Some(url) => view! { <img class="avatar" src=url alt="Profile"/> }.into_any(),
                            None => view! { <div class="avatar avatar--placeholder">{initial}</div> }.into_any(),
                        }}
                        <input
                            id="profile-image"
                            class="profile-card__file"
                            type="file"
                            accept="image/*"
                            on:change=on_picture
                            disabled=move || state.get().uploading
                        />
                        <label for="profile-image" class="profile-card__file-label">
                            {move || if state.get().uploading { "Uploading..." } else { "Change Profile Picture" }}
                        </label>
                    </div>

                    <form class="profile-form" on:submit=on_save>
                        <label class="profile-form__field">
                            <span>"Username"</span>
                            <input type="text" prop:value=username disabled=true/>
                        </label>
                        <label class="profile-form__field">
                            <span>"Email"</span>
                            <input type="email" prop:value=email disabled=true/>
                        </label>
                        <label class="profile-form__field">
                            <span>"Bio"</span>
                            <textarea
                                rows="3"
                                prop:value=move || state.get().draft_bio
                                on:input=move |ev| state.update(|s| s.draft_bio = event_target_value(&ev))
                                disabled=move || !editing()
                            ></textarea>
                        </label>
                        <label class="profile-form__field">
                            <span>"Affiliation"</span>
                            <input
                                type="text"
                                prop:value=move || state.get().draft_affiliation
                                on:input=move |ev| state.update(|s| s.draft_affiliation = event_target_value(&ev))
                                disabled=move || !editing()
                            />
                        </label>

                        <div class="profile-form__actions">
                            <Show
                                when=editing
                                fallback=move || {
                                    view! {
                                        <button class="button" type="button" on:click=toggle_editing>
                                            "Edit Profile"
                                        </button>
                                    }
                                }
                            >
                                <button class="button button--secondary" type="button" on:click=toggle_editing>
                                    "Cancel"
                                </button>
                                <button class="button" type="submit" disabled=move || state.get().loading>
                                    "Save Changes"
                                </button>
                            </Show>
                        </div>
                    </form>
                </Show>
            </div>
        </section>
    }
}
