use thiserror::Error;

use lzscrape_core::ProductField;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("element not found: {locator}")]
    ElementNotFound { locator: String },

    #[error("stale element reference: {locator}")]
    StaleElement { locator: String },

    #[error("timed out after {timeout_secs}s waiting for {locator}")]
    WaitTimeout { locator: String, timeout_secs: u64 },

    #[error("site profile has no selector for field '{field}'")]
    MissingSelector { field: ProductField },

    #[error("invalid scrape request: {reason}")]
    InvalidRequest { reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScraperError {
    /// Returns `true` for the element-level failures a single field read is
    /// allowed to absorb: element not found, stale element, wait timeout.
    ///
    /// Everything else (lost WebDriver session, navigation failures, output
    /// errors) ends the run.
    #[must_use]
    pub fn is_field_recoverable(&self) -> bool {
        matches!(
            self,
            ScraperError::ElementNotFound { .. }
                | ScraperError::StaleElement { .. }
                | ScraperError::WaitTimeout { .. }
        )
    }
}
