use super::*;

#[test]
fn from_raw_uses_defaults_when_unset() {
    let cfg = ClientConfig::from_raw(RawConfig::default());
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert!(cfg.asset_host.is_none());
}

#[test]
fn from_raw_trims_trailing_slash_from_base_url() {
    let cfg = ClientConfig::from_raw(RawConfig {
        api_base_url: Some("https://campus.example.test/api/"),
        ..RawConfig::default()
    });
    assert_eq!(cfg.api_base_url, "https://campus.example.test/api");
}

#[test]
fn from_raw_ignores_invalid_or_zero_timeout() {
    for raw in ["abc", "0", "  "] {
        let cfg = ClientConfig::from_raw(RawConfig { request_timeout_secs: Some(raw), ..RawConfig::default() });
        assert_eq!(cfg.request_timeout, Duration::from_secs(10), "input {raw:?}");
    }
    let cfg = ClientConfig::from_raw(RawConfig { request_timeout_secs: Some("25"), ..RawConfig::default() });
    assert_eq!(cfg.request_timeout, Duration::from_secs(25));
}

#[test]
fn from_raw_enables_asset_host_only_with_url() {
    let without_url = ClientConfig::from_raw(RawConfig {
        asset_upload_preset: Some("preset"),
        asset_cloud_name: Some("cloud"),
        ..RawConfig::default()
    });
    assert!(without_url.asset_host.is_none());

    let with_url = ClientConfig::from_raw(RawConfig {
        asset_upload_url: Some("https://images.example.test/v1/upload"),
        asset_upload_preset: Some("preset"),
        asset_cloud_name: Some("cloud"),
        ..RawConfig::default()
    });
    assert_eq!(
        with_url.asset_host,
        Some(AssetHostConfig {
            upload_url: "https://images.example.test/v1/upload".to_owned(),
            upload_preset: "preset".to_owned(),
            cloud_name: "cloud".to_owned(),
        })
    );
}

#[test]
fn endpoint_joins_paths_with_single_slash() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint("/user/profile/"), "/api/user/profile/");
    assert_eq!(cfg.endpoint("user/login/"), "/api/user/login/");
}
