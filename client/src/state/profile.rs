//! Profile page state: the loaded profile, its editable draft, and the
//! load/save/picture flows.
//!
//! ERROR HANDLING
//! ==============
//! Failures are reduced to a single banner string. Image-host failures get
//! their own message so users can tell them apart from rejected saves.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::error::ClientError;
use crate::net::api::AuthBackend;
use crate::net::assets::AssetUploader;
use crate::net::types::{ProfileUpdate, UserProfile};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load profile";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update profile";
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload image";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub draft_bio: String,
    pub draft_affiliation: String,
    pub editing: bool,
    pub loading: bool,
    pub uploading: bool,
    pub error: Option<String>,
}

impl ProfileState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Install a freshly fetched profile and reset the draft to match it.
    pub fn apply(&mut self, profile: UserProfile) {
        self.draft_bio = profile.bio.clone().unwrap_or_default();
        self.draft_affiliation = profile.affiliation.clone().unwrap_or_default();
        self.profile = Some(profile);
        self.loading = false;
        self.uploading = false;
        self.editing = false;
        self.error = None;
    }

    pub fn fail(&mut self, error: &ClientError) {
        self.loading = false;
        self.uploading = false;
        self.error = Some(failure_message(error, self.profile.is_some()));
    }

    /// Enter or leave edit mode. Leaving discards unsaved draft changes.
    /// Without a loaded profile there is nothing to edit.
    pub fn toggle_editing(&mut self) {
        if self.profile.is_none() {
            self.editing = false;
            return;
        }
        if self.editing {
            if let Some(profile) = &self.profile {
                self.draft_bio = profile.bio.clone().unwrap_or_default();
                self.draft_affiliation = profile.affiliation.clone().unwrap_or_default();
            }
        }
        self.editing = !self.editing;
    }

    /// True when the draft came from a loaded profile and no request is in flight.
    pub fn can_save(&self) -> bool {
        self.editing && !self.loading && self.profile.is_some()
    }

    pub fn draft_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            bio: Some(self.draft_bio.clone()),
            affiliation: Some(self.draft_affiliation.clone()),
            profile_picture: None,
        }
    }
}

/// Banner text for a failed profile operation.
pub fn failure_message(error: &ClientError, profile_loaded: bool) -> String {
    match error {
        ClientError::UploadFailure(_) => UPLOAD_FAILED_MESSAGE.to_owned(),
        _ if profile_loaded => UPDATE_FAILED_MESSAGE.to_owned(),
        _ => LOAD_FAILED_MESSAGE.to_owned(),
    }
}

/// Persist the draft, then re-read the profile so the page shows what the
/// backend actually stored.
///
/// # Errors
///
/// Returns the first failing request's error.
pub async fn save_profile(backend: &dyn AuthBackend, update: &ProfileUpdate) -> Result<UserProfile, ClientError> {
    backend.update_profile(update).await?;
    backend.current_user().await
}

/// Upload a new picture to the asset host, then point the profile at it.
///
/// If the profile update fails after a successful upload, the hosted image
/// is left orphaned.
///
/// # Errors
///
/// Returns `UploadFailure` when the host step fails, otherwise the backend's error.
pub async fn change_picture<U: AssetUploader>(
    backend: &dyn AuthBackend,
    uploader: &U,
    file: U::File,
) -> Result<UserProfile, ClientError> {
    let url = uploader.upload(file).await.map_err(|e| match e {
        ClientError::UploadFailure(_) => e,
        other => ClientError::UploadFailure(other.to_string()),
    })?;

    if let Err(e) = backend.update_profile(&ProfileUpdate::picture(url.as_str())).await {
        leptos::logging::warn!("uploaded image {url} not saved to profile: {e}");
        return Err(e);
    }
    backend.current_user().await
}
