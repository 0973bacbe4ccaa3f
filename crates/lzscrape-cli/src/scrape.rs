//! `scrape` command handler.
//!
//! Connects a browser, runs one keyword scrape, and prints the result. The
//! scraper releases the browser itself on every exit path.

use std::path::PathBuf;

use anyhow::Context;
use lzscrape_core::{AppConfig, SiteProfile};
use lzscrape_scraper::{render_table, PageScraper, RunOutcome, ScrapeOptions, WebDriverSession};

/// Applies command-line flags on top of the environment configuration.
///
/// `--detach` can only switch detach mode on; leaving the flag off keeps
/// whatever `LZSCRAPE_DETACH` says.
pub(crate) fn apply_overrides(
    mut config: AppConfig,
    output: Option<PathBuf>,
    detach: bool,
) -> AppConfig {
    if let Some(path) = output {
        config.output_path = path;
    }
    config.detach |= detach;
    config
}

/// The built-in Lazada profile, or the YAML profile named by
/// `LZSCRAPE_SITE_PROFILE_PATH`.
pub(crate) fn resolve_site_profile(config: &AppConfig) -> anyhow::Result<SiteProfile> {
    match &config.site_profile_path {
        Some(path) => {
            let profile = lzscrape_core::load_site_profile(path)
                .with_context(|| format!("loading site profile {}", path.display()))?;
            tracing::info!(path = %path.display(), "using site profile from file");
            Ok(profile)
        }
        None => Ok(SiteProfile::default()),
    }
}

/// Scrapes `pages` listing pages for `keyword` and prints the collected rows.
///
/// # Errors
///
/// Returns an error if the site profile cannot be loaded, the WebDriver
/// session cannot be started, or the scrape fails at session level.
pub(crate) async fn run_scrape(
    config: &AppConfig,
    keyword: &str,
    pages: u32,
) -> anyhow::Result<()> {
    let profile = resolve_site_profile(config)?;
    let driver = WebDriverSession::connect(config)
        .await
        .with_context(|| format!("connecting to WebDriver at {}", config.webdriver_url))?;

    let scraper = PageScraper::new(driver, profile, ScrapeOptions::from_config(config));
    let outcome = scraper
        .scrape(keyword, pages)
        .await
        .with_context(|| format!("scraping '{keyword}'"))?;

    println!("{}", outcome_report(&outcome));
    if matches!(outcome, RunOutcome::Exported { .. }) {
        tracing::info!(keyword, %outcome, "scrape complete");
    }
    Ok(())
}

/// What the command prints to stdout: the row table after an export, or the
/// single insufficient-pages message.
pub(crate) fn outcome_report(outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::Exported { records, .. } => render_table(records),
        RunOutcome::InsufficientPages { .. } => outcome.to_string(),
    }
}

#[cfg(test)]
#[path = "scrape_test.rs"]
mod tests;
