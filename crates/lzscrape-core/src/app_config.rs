use std::path::PathBuf;

/// Runtime settings for a scrape run, resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Endpoint of the WebDriver server (chromedriver) the browser is driven through.
    pub webdriver_url: String,
    /// Where the CSV artifact is written. Existing content is overwritten.
    pub output_path: PathBuf,
    /// Upper bound for each per-field presence wait.
    pub field_timeout_secs: u64,
    /// How often a pending field wait re-polls the page.
    pub poll_interval_ms: u64,
    /// Leave the browser window open when the run ends.
    pub detach: bool,
    pub headless: bool,
    /// Optional YAML file replacing the built-in site locators.
    pub site_profile_path: Option<PathBuf>,
    pub log_level: String,
}
