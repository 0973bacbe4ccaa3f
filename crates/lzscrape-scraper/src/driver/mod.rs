//! Browser seam used by [`crate::PageScraper`].
//!
//! [`PageDriver`] covers exactly the operations a listing scrape needs:
//! navigation, refresh, reading text, locating product cards, bounded field
//! waits, scripted clicks, and a single consuming release. The production
//! implementation is [`WebDriverSession`]; tests substitute an in-memory page.

mod webdriver;

use std::time::Duration;

use crate::error::ScraperError;

pub use webdriver::WebDriverSession;

/// Bounds for a single field presence wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWait {
    /// Give up on the field after this long.
    pub timeout: Duration,
    /// Re-check the page this often while waiting.
    pub poll_interval: Duration,
}

impl FieldWait {
    #[must_use]
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }
}

impl Default for FieldWait {
    fn default() -> Self {
        Self::new(Duration::from_secs(3), Duration::from_millis(250))
    }
}

/// What happens to the browser window when the session is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseMode {
    /// End the WebDriver session and close the browser.
    Quit,
    /// Relinquish the handle but leave the browser window open.
    ///
    /// The WebDriver client is leaked rather than dropped: dropping it would
    /// delete the chromedriver session and close the window. The session
    /// stays registered on the chromedriver side until it is killed.
    Detach,
}

impl ReleaseMode {
    #[must_use]
    pub fn from_detach(detach: bool) -> Self {
        if detach {
            ReleaseMode::Detach
        } else {
            ReleaseMode::Quit
        }
    }
}

/// A single, exclusively owned browser handle.
///
/// Every call happens from one sequential flow, so futures are not required
/// to be `Send`.
#[allow(async_fn_in_trait)]
pub trait PageDriver {
    /// Handle to one product card found on the current page.
    type Item;

    /// Navigate to `url` and wait for the document to load.
    async fn goto(&mut self, url: &str) -> Result<(), ScraperError>;

    /// Reload the current page.
    async fn refresh(&mut self) -> Result<(), ScraperError>;

    /// Displayed text of the element at `xpath`, without waiting.
    async fn text_at(&mut self, xpath: &str) -> Result<String, ScraperError>;

    /// All product cards on the current page carrying `class_name`, in
    /// document order.
    async fn find_items(&mut self, class_name: &str) -> Result<Vec<Self::Item>, ScraperError>;

    /// Wait for `xpath` to be present, then read its displayed text from
    /// within `item`.
    async fn wait_for_text(
        &mut self,
        item: &Self::Item,
        xpath: &str,
        wait: FieldWait,
    ) -> Result<String, ScraperError>;

    /// Click the element at `xpath` through a script call rather than a
    /// native click, so overlays and scroll position do not intercept it.
    async fn click(&mut self, xpath: &str) -> Result<(), ScraperError>;

    /// Give the browser back. Consumes the handle so it is released at most once.
    async fn release(self, mode: ReleaseMode) -> Result<(), ScraperError>
    where
        Self: Sized;
}
