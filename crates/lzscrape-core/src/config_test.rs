use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.webdriver_url, "http://localhost:9515");
    assert_eq!(cfg.output_path, PathBuf::from("sample.csv"));
    assert_eq!(cfg.field_timeout_secs, 3);
    assert_eq!(cfg.poll_interval_ms, 250);
    assert!(!cfg.detach);
    assert!(!cfg.headless);
    assert!(cfg.site_profile_path.is_none());
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("LZSCRAPE_WEBDRIVER_URL", "http://127.0.0.1:4444");
    map.insert("LZSCRAPE_OUTPUT_PATH", "/tmp/out.csv");
    map.insert("LZSCRAPE_FIELD_TIMEOUT_SECS", "5");
    map.insert("LZSCRAPE_POLL_INTERVAL_MS", "100");
    map.insert("LZSCRAPE_DETACH", "yes");
    map.insert("LZSCRAPE_HEADLESS", "1");
    map.insert("LZSCRAPE_SITE_PROFILE_PATH", "./config/site.yaml");
    map.insert("LZSCRAPE_LOG_LEVEL", "debug");

    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.webdriver_url, "http://127.0.0.1:4444");
    assert_eq!(cfg.output_path, PathBuf::from("/tmp/out.csv"));
    assert_eq!(cfg.field_timeout_secs, 5);
    assert_eq!(cfg.poll_interval_ms, 100);
    assert!(cfg.detach);
    assert!(cfg.headless);
    assert_eq!(
        cfg.site_profile_path,
        Some(PathBuf::from("./config/site.yaml"))
    );
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn build_app_config_rejects_zero_field_timeout() {
    let mut map = HashMap::new();
    map.insert("LZSCRAPE_FIELD_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LZSCRAPE_FIELD_TIMEOUT_SECS"),
        "expected InvalidEnvVar(LZSCRAPE_FIELD_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_field_timeout() {
    let mut map = HashMap::new();
    map.insert("LZSCRAPE_FIELD_TIMEOUT_SECS", "three");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LZSCRAPE_FIELD_TIMEOUT_SECS"),
        "expected InvalidEnvVar(LZSCRAPE_FIELD_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_poll_interval() {
    let mut map = HashMap::new();
    map.insert("LZSCRAPE_POLL_INTERVAL_MS", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LZSCRAPE_POLL_INTERVAL_MS"),
        "expected InvalidEnvVar(LZSCRAPE_POLL_INTERVAL_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_poll_interval() {
    let mut map = HashMap::new();
    map.insert("LZSCRAPE_POLL_INTERVAL_MS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LZSCRAPE_POLL_INTERVAL_MS"),
        "expected InvalidEnvVar(LZSCRAPE_POLL_INTERVAL_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_detach_flag() {
    let mut map = HashMap::new();
    map.insert("LZSCRAPE_DETACH", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LZSCRAPE_DETACH"),
        "expected InvalidEnvVar(LZSCRAPE_DETACH), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_webdriver_url() {
    let mut map = HashMap::new();
    map.insert("LZSCRAPE_WEBDRIVER_URL", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LZSCRAPE_WEBDRIVER_URL"),
        "expected InvalidEnvVar(LZSCRAPE_WEBDRIVER_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_site_profile_path_as_unset() {
    let mut map = HashMap::new();
    map.insert("LZSCRAPE_SITE_PROFILE_PATH", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.site_profile_path.is_none());
}

#[test]
fn parse_bool_accepts_common_spellings() {
    for raw in ["true", "TRUE", "1", "yes", " Yes "] {
        assert!(parse_bool("X", raw).unwrap(), "{raw} should parse as true");
    }
    for raw in ["false", "False", "0", "no"] {
        assert!(!parse_bool("X", raw).unwrap(), "{raw} should parse as false");
    }
}
