//! Client configuration resolved from build-time environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so values are baked
//! in with `option_env!` when the crate is compiled. Parsing is kept separate
//! from lookup so defaults and overrides can be tested without rebuilding.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Upload endpoint and identifiers for the third-party image host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetHostConfig {
    pub upload_url: String,
    pub upload_preset: String,
    pub cloud_name: String,
}

/// Typed client configuration shared through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub asset_host: Option<AssetHostConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            asset_host: None,
        }
    }
}

/// Raw, unparsed configuration values as they were found in the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawConfig<'a> {
    pub api_base_url: Option<&'a str>,
    pub request_timeout_secs: Option<&'a str>,
    pub asset_upload_url: Option<&'a str>,
    pub asset_upload_preset: Option<&'a str>,
    pub asset_cloud_name: Option<&'a str>,
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `CAMPUS_API_BASE_URL`: default `/api`
    /// - `CAMPUS_REQUEST_TIMEOUT_SECS`: default 10
    /// - `CAMPUS_ASSET_UPLOAD_URL`: image uploads disabled when absent
    /// - `CAMPUS_ASSET_UPLOAD_PRESET`, `CAMPUS_ASSET_CLOUD_NAME`
    pub fn from_build_env() -> Self {
        Self::from_raw(RawConfig {
            api_base_url: option_env!("CAMPUS_API_BASE_URL"),
            request_timeout_secs: option_env!("CAMPUS_REQUEST_TIMEOUT_SECS"),
            asset_upload_url: option_env!("CAMPUS_ASSET_UPLOAD_URL"),
            asset_upload_preset: option_env!("CAMPUS_ASSET_UPLOAD_PRESET"),
            asset_cloud_name: option_env!("CAMPUS_ASSET_CLOUD_NAME"),
        })
    }

    pub fn from_raw(raw: RawConfig<'_>) -> Self {
        let api_base_url = non_empty(raw.api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let request_timeout = Duration::from_secs(parse_secs(raw.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS));
        let asset_host = non_empty(raw.asset_upload_url).map(|url| AssetHostConfig {
            upload_url: url.to_owned(),
            upload_preset: non_empty(raw.asset_upload_preset).unwrap_or_default().to_owned(),
            cloud_name: non_empty(raw.asset_cloud_name).unwrap_or_default().to_owned(),
        });

        Self { api_base_url, request_timeout, asset_host }
    }

    /// Join an API path onto the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_secs(raw: Option<&str>, default: u64) -> u64 {
    non_empty(raw)
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}
