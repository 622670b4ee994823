//! Unit tests for environment credential loading.
//!
//! Every test but one goes through `load_credentials_with` so the process
//! environment is never touched; the last test covers the real lookup and
//! runs serially.

use std::collections::HashMap;

use switchboard::config::GlobalConfig;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

fn load(pairs: &[(&str, &str)]) -> switchboard::Result<GlobalConfig> {
    let mut config = GlobalConfig::default();
    config.load_credentials_with(lookup(pairs))?;
    Ok(config)
}

#[test]
fn front_token_alone_is_enough() {
    let config = load(&[("FRONTAPP_API_TOKEN", "front-secret")]).expect("loads");
    assert_eq!(config.credentials.frontapp_api_token, "front-secret");
    assert!(config.credentials.pipedrive.is_none());
    assert!(config.credentials.instantly_api_key.is_none());
    assert!(config.credentials.dealfront_api_key.is_none());
    assert!(config.credentials.mcp_auth_token.is_none());
}

#[test]
fn missing_front_token_is_fatal() {
    let err = load(&[("INSTANTLY_API_KEY", "k")]).expect_err("front required");
    assert!(err.to_string().contains("FRONTAPP_API_TOKEN"));
}

#[test]
fn empty_front_token_counts_as_missing() {
    let err = load(&[("FRONTAPP_API_TOKEN", "  ")]).expect_err("blank token");
    assert!(err.to_string().contains("FRONTAPP_API_TOKEN"));
}

#[test]
fn pipedrive_needs_token_and_domain() {
    let err = load(&[("FRONTAPP_API_TOKEN", "f"), ("PIPEDRIVE_API_TOKEN", "p")])
        .expect_err("domain missing");
    assert!(err.to_string().contains("PIPEDRIVE_DOMAIN"));

    let err = load(&[("FRONTAPP_API_TOKEN", "f"), ("PIPEDRIVE_DOMAIN", "acme")])
        .expect_err("token missing");
    assert!(err.to_string().contains("PIPEDRIVE_API_TOKEN"));
}

#[test]
fn pipedrive_base_url_derives_from_domain() {
    let config = load(&[
        ("FRONTAPP_API_TOKEN", "f"),
        ("PIPEDRIVE_API_TOKEN", "p"),
        ("PIPEDRIVE_DOMAIN", "acme"),
    ])
    .expect("loads");
    assert_eq!(
        config.pipedrive_base_url().as_deref(),
        Some("https://acme.pipedrive.com/api/v1")
    );
}

#[test]
fn pipedrive_base_url_absent_without_credentials() {
    let config = load(&[("FRONTAPP_API_TOKEN", "f")]).expect("loads");
    assert_eq!(config.pipedrive_base_url(), None);
}

#[test]
fn ip_enrich_requires_dealfront_key() {
    let err = load(&[
        ("FRONTAPP_API_TOKEN", "f"),
        ("DEALFRONT_IP_ENRICH_API_KEY", "ip"),
    ])
    .expect_err("companion missing");
    assert!(err.to_string().contains("DEALFRONT_API_KEY"));

    let config = load(&[
        ("FRONTAPP_API_TOKEN", "f"),
        ("DEALFRONT_API_KEY", "d"),
        ("DEALFRONT_IP_ENRICH_API_KEY", "ip"),
    ])
    .expect("both present");
    assert_eq!(
        config.credentials.dealfront_ip_enrich_api_key.as_deref(),
        Some("ip")
    );
}

#[test]
fn port_overrides_file_value() {
    let config = load(&[("FRONTAPP_API_TOKEN", "f"), ("PORT", "8123")]).expect("loads");
    assert_eq!(config.http_port, 8123);
}

#[test]
fn invalid_port_is_fatal() {
    let err = load(&[("FRONTAPP_API_TOKEN", "f"), ("PORT", "eighty")]).expect_err("bad port");
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn bind_address_overrides_file_value() {
    let config = load(&[
        ("FRONTAPP_API_TOKEN", "f"),
        ("PORT", "8080"),
        ("BIND_ADDRESS", "0.0.0.0"),
    ])
    .expect("loads");
    assert_eq!(config.bind_address, "0.0.0.0");
    assert_eq!(config.http_port, 8080);
}

#[test]
fn invalid_bind_address_is_fatal() {
    let err = load(&[("FRONTAPP_API_TOKEN", "f"), ("BIND_ADDRESS", "everywhere")])
        .expect_err("bad address");
    assert!(err.to_string().contains("invalid BIND_ADDRESS"));
}

#[test]
fn gateway_secret_is_loaded() {
    let config = load(&[("FRONTAPP_API_TOKEN", "f"), ("MCP_AUTH_TOKEN", "s3cret")])
        .expect("loads");
    assert_eq!(config.credentials.mcp_auth_token.as_deref(), Some("s3cret"));
}

/// Covers the real process-environment lookup.
#[test]
#[serial_test::serial]
#[allow(unsafe_code)]
fn load_credentials_reads_process_environment() {
    // SAFETY: serialized with every other test that touches the environment.
    unsafe {
        std::env::set_var("FRONTAPP_API_TOKEN", "env-front-token");
        std::env::set_var("INSTANTLY_API_KEY", "env-instantly-key");
        std::env::remove_var("PIPEDRIVE_API_TOKEN");
        std::env::remove_var("PIPEDRIVE_DOMAIN");
        std::env::remove_var("DEALFRONT_IP_ENRICH_API_KEY");
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDRESS");
    }

    let mut config = GlobalConfig::default();
    let result = config.load_credentials();

    unsafe {
        std::env::remove_var("FRONTAPP_API_TOKEN");
        std::env::remove_var("INSTANTLY_API_KEY");
    }

    result.expect("environment credentials load");
    assert_eq!(config.credentials.frontapp_api_token, "env-front-token");
    assert_eq!(
        config.credentials.instantly_api_key.as_deref(),
        Some("env-instantly-key")
    );
}
