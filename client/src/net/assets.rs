//! Image uploads to the third-party asset host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile pictures are stored on an external host, not the account backend.
//! The host returns a `secure_url` which the profile flow then persists with a
//! separate `PATCH /user/profile/`. The two steps are not atomic.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

#[cfg(any(test, feature = "csr"))]
use super::types::AssetUploadResponse;
use crate::config::AssetHostConfig;
use crate::error::ClientError;

/// Uploads a file and yields its public URL.
#[async_trait::async_trait(?Send)]
pub trait AssetUploader {
    /// Browser file handle or a test stand-in.
    type File;

    /// Upload `file` and return the hosted URL.
    ///
    /// # Errors
    ///
    /// Returns `UploadFailure` when the host is unconfigured, unreachable, or
    /// answers without a URL.
    async fn upload(&self, file: Self::File) -> Result<String, ClientError>;
}

/// Uploader for the configured image host.
#[derive(Debug, Clone)]
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub struct HostedAssetUploader {
    host: Option<AssetHostConfig>,
    timeout: std::time::Duration,
}

impl HostedAssetUploader {
    pub fn new(host: Option<AssetHostConfig>, timeout: std::time::Duration) -> Self {
        Self { host, timeout }
    }

    #[cfg(any(test, feature = "csr"))]
    fn host(&self) -> Result<&AssetHostConfig, ClientError> {
        self.host
            .as_ref()
            .ok_or_else(|| ClientError::UploadFailure("image hosting is not configured".to_owned()))
    }

    #[cfg(any(test, feature = "csr"))]
    /// Non-file form fields the host expects next to `file`.
    pub(crate) fn form_fields(&self) -> Result<[(&'static str, String); 2], ClientError> {
        let host = self.host()?;
        Ok([("upload_preset", host.upload_preset.clone()), ("cloud_name", host.cloud_name.clone())])
    }
}

#[cfg(any(test, feature = "csr"))]
/// Pull the hosted URL out of an upload response body.
pub(crate) fn secure_url(value: serde_json::Value) -> Result<String, ClientError> {
    let response: AssetUploadResponse =
        serde_json::from_value(value).map_err(|e| ClientError::UploadFailure(e.to_string()))?;
    response
        .secure_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ClientError::UploadFailure("upload response did not include a URL".to_owned()))
}

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl AssetUploader for HostedAssetUploader {
    type File = web_sys::File;

    async fn upload(&self, file: web_sys::File) -> Result<String, ClientError> {
        use super::api::{dispatch, js_error};

        let fields = self.form_fields()?;
        let url = self.host()?.upload_url.clone();
        let value = dispatch(self.timeout, |signal| {
            let form = web_sys::FormData::new().map_err(js_error)?;
            form.append_with_blob("file", &file).map_err(js_error)?;
            for (name, value) in &fields {
                form.append_with_str(name, value).map_err(js_error)?;
            }
            gloo_net::http::Request::post(&url)
                .abort_signal(Some(signal))
                .body(form)
                .map_err(|e| ClientError::NetworkFailure(e.to_string()))
        })
        .await
        .map_err(|e| match e {
            ClientError::UploadFailure(_) => e,
            other => ClientError::UploadFailure(other.to_string()),
        })?;
        secure_url(value)
    }
}
