use crate::app_config::AppConfig;
use crate::ConfigError;

/// Reads `.env` (if present) and resolves the scrape settings from the
/// environment.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Same as [`load_app_config`] but only looks at the process environment.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Resolves every setting through `lookup`; unset variables take their
/// defaults.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_flag = |var: &str, default: &str| -> Result<bool, ConfigError> {
        parse_bool(var, &or_default(var, default))
    };

    let webdriver_url = or_default("LZSCRAPE_WEBDRIVER_URL", "http://localhost:9515");
    if webdriver_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "LZSCRAPE_WEBDRIVER_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let output_path = PathBuf::from(or_default("LZSCRAPE_OUTPUT_PATH", "sample.csv"));

    let field_timeout_secs = parse_u64("LZSCRAPE_FIELD_TIMEOUT_SECS", "3")?;
    if field_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LZSCRAPE_FIELD_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }
    let poll_interval_ms = parse_u64("LZSCRAPE_POLL_INTERVAL_MS", "250")?;
    if poll_interval_ms == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LZSCRAPE_POLL_INTERVAL_MS".to_string(),
            reason: "must be at least 1 millisecond".to_string(),
        });
    }

    let detach = parse_flag("LZSCRAPE_DETACH", "false")?;
    let headless = parse_flag("LZSCRAPE_HEADLESS", "false")?;

    let site_profile_path = lookup("LZSCRAPE_SITE_PROFILE_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let log_level = or_default("LZSCRAPE_LOG_LEVEL", "info");

    Ok(AppConfig {
        webdriver_url,
        output_path,
        field_timeout_secs,
        poll_interval_ms,
        detach,
        headless,
        site_profile_path,
        log_level,
    })
}

/// Parse a boolean flag value. Accepts `true/false`, `1/0` and `yes/no`,
/// case-insensitively.
fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
