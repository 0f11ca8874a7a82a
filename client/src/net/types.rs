//! Wire DTOs for the account backend and the image host.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly (including the capitalised
//! `Affiliation`) so profile responses deserialize without adapters.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Account identity nested inside a profile response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub email: String,
    pub username: String,
}

/// The signed-in user's profile as returned by `GET /user/profile/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user: User,
    #[serde(default)]
    pub bio: Option<String>,
    /// Hosted image URL, if the user has uploaded a picture.
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(rename = "Affiliation", default)]
    pub affiliation: Option<String>,
}

impl UserProfile {
    /// Single-character avatar placeholder used when no picture is set.
    pub fn initial(&self) -> String {
        self.user
            .username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Login input. Held only for the duration of a single login call.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(rename = "email")]
    pub identifier: String,
    #[serde(rename = "password")]
    pub secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Opaque body returned by `POST /user/login/`; the session itself travels in cookies.
pub type LoginResponse = serde_json::Value;

/// Registration payload for `POST /user/register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

impl RegistrationForm {
    /// Local confirmation check performed before any network call.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the two password fields differ.
    pub fn check_passwords(&self) -> Result<(), ClientError> {
        if self.password == self.confirm_password {
            Ok(())
        } else {
            Err(ClientError::Validation(PASSWORD_MISMATCH_MESSAGE))
        }
    }
}

/// Body returned after a successful registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisteredUser {
    /// Identifier of the created account.
    pub user: String,
}

/// Partial profile update for `PATCH /user/profile/`. Unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "Affiliation", skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl ProfileUpdate {
    pub fn picture(url: impl Into<String>) -> Self {
        Self { profile_picture: Some(url.into()), ..Self::default() }
    }

    /// Picture updates are sent as multipart form data; everything else is JSON.
    pub fn is_multipart(&self) -> bool {
        self.profile_picture.is_some()
    }

    /// Flatten set fields into `(name, value)` pairs for a multipart body.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(bio) = &self.bio {
            fields.push(("bio", bio.clone()));
        }
        if let Some(affiliation) = &self.affiliation {
            fields.push(("Affiliation", affiliation.clone()));
        }
        if let Some(url) = &self.profile_picture {
            fields.push(("profile_picture", url.clone()));
        }
        fields
    }
}

/// Response from the image host's upload endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AssetUploadResponse {
    #[serde(default)]
    pub secure_url: Option<String>,
}
