//! [`PageDriver`] backed by a Chrome session on a WebDriver server.

use std::time::Duration;

use thirtyfour::error::WebDriverError;
use thirtyfour::fantoccini::error::CmdError;
use thirtyfour::prelude::*;

use lzscrape_core::AppConfig;

use super::{FieldWait, PageDriver, ReleaseMode};
use crate::error::ScraperError;

const SCRIPT_CLICK: &str = "arguments[0].click();";

/// W3C error code for an element that left the DOM after it was found.
const STALE_ELEMENT_CODE: &str = "stale element reference";

/// A Chrome browser driven through chromedriver.
pub struct WebDriverSession {
    driver: WebDriver,
}

impl WebDriverSession {
    /// Starts a Chrome session on the WebDriver server at
    /// `config.webdriver_url`.
    ///
    /// With `config.detach` set, Chrome is asked to outlive the driver so the
    /// window can stay open after the run.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::WebDriver`] if the capabilities are rejected or
    /// the server cannot be reached.
    pub async fn connect(config: &AppConfig) -> Result<Self, ScraperError> {
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless()?;
        }
        if config.detach {
            caps.add_chrome_option("detach", true)?;
        }
        caps.add_chrome_arg("window-size=1920,1080")?;

        let driver = WebDriver::new(&config.webdriver_url, caps).await?;
        tracing::info!(
            webdriver_url = %config.webdriver_url,
            headless = config.headless,
            detach = config.detach,
            "browser session started"
        );
        Ok(Self { driver })
    }
}

/// Maps element-level WebDriver failures onto the recoverable
/// [`ScraperError`] kinds; anything else stays a session-level error.
///
/// `waited` is the wait budget when the failure came out of a presence wait.
/// An element query that exhausts its wait reports `NoSuchElement`, which is
/// surfaced as [`ScraperError::WaitTimeout`]. Chromedriver reports most stale
/// elements as `NoSuchElement` too; the rest arrive as a standard command
/// error carrying the stale element code.
fn classify(err: WebDriverError, locator: &str, waited: Option<Duration>) -> ScraperError {
    let locator = locator.to_owned();
    match (err, waited) {
        (WebDriverError::NoSuchElement(_) | WebDriverError::Timeout(_), Some(timeout)) => {
            ScraperError::WaitTimeout {
                locator,
                timeout_secs: timeout.as_secs(),
            }
        }
        (WebDriverError::Timeout(_), None) => ScraperError::WaitTimeout {
            locator,
            timeout_secs: 0,
        },
        (WebDriverError::NoSuchElement(_), None) => ScraperError::ElementNotFound { locator },
        (WebDriverError::CmdError(CmdError::Standard(w)), _) if is_stale_code(w.error()) => {
            ScraperError::StaleElement { locator }
        }
        (other, _) => ScraperError::WebDriver(other),
    }
}

fn is_stale_code(code: &str) -> bool {
    code == STALE_ELEMENT_CODE
}

impl PageDriver for WebDriverSession {
    type Item = WebElement;

    async fn goto(&mut self, url: &str) -> Result<(), ScraperError> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn refresh(&mut self) -> Result<(), ScraperError> {
        self.driver.refresh().await?;
        Ok(())
    }

    async fn text_at(&mut self, xpath: &str) -> Result<String, ScraperError> {
        let element = self
            .driver
            .find(By::XPath(xpath))
            .await
            .map_err(|e| classify(e, xpath, None))?;
        element.text().await.map_err(|e| classify(e, xpath, None))
    }

    async fn find_items(&mut self, class_name: &str) -> Result<Vec<Self::Item>, ScraperError> {
        let items = self.driver.find_all(By::ClassName(class_name)).await?;
        Ok(items)
    }

    async fn wait_for_text(
        &mut self,
        item: &Self::Item,
        xpath: &str,
        wait: FieldWait,
    ) -> Result<String, ScraperError> {
        self.driver
            .query(By::XPath(xpath))
            .wait(wait.timeout, wait.poll_interval)
            .first()
            .await
            .map_err(|e| classify(e, xpath, Some(wait.timeout)))?;

        let element = item
            .find(By::XPath(xpath))
            .await
            .map_err(|e| classify(e, xpath, None))?;
        element.text().await.map_err(|e| classify(e, xpath, None))
    }

    async fn click(&mut self, xpath: &str) -> Result<(), ScraperError> {
        let target = self
            .driver
            .find(By::XPath(xpath))
            .await
            .map_err(|e| classify(e, xpath, None))?;
        self.driver
            .execute(SCRIPT_CLICK, vec![target.to_json()?])
            .await?;
        Ok(())
    }

    async fn release(self, mode: ReleaseMode) -> Result<(), ScraperError> {
        match mode {
            ReleaseMode::Quit => {
                self.driver.quit().await?;
                tracing::info!("browser closed");
            }
            ReleaseMode::Detach => {
                // Dropping the last client handle deletes the session, which
                // closes Chrome even with `detach`.
                std::mem::forget(self.driver);
                tracing::info!("browser left open (detach mode)");
            }
        }
        Ok(())
    }
}
