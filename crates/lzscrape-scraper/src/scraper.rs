//! Keyword listing scrape: open, count pages, walk them, export.

use std::path::PathBuf;
use std::time::Duration;

use lzscrape_core::{AppConfig, ProductField, ProductRecord, SiteProfile};

use crate::driver::{FieldWait, PageDriver, ReleaseMode};
use crate::error::ScraperError;
use crate::export::write_csv;
use crate::field::read_field_or_default;
use crate::pagination::parse_page_total;
use crate::session::ScrapeSession;

/// Per-run knobs that are not part of the site profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub field_wait: FieldWait,
    /// CSV artifact location; overwritten on every successful run.
    pub output_path: PathBuf,
    pub release_mode: ReleaseMode,
}

impl ScrapeOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            field_wait: FieldWait::new(
                Duration::from_secs(config.field_timeout_secs),
                Duration::from_millis(config.poll_interval_ms),
            ),
            output_path: config.output_path.clone(),
            release_mode: ReleaseMode::from_detach(config.detach),
        }
    }
}

/// How a run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every requested page was visited and the rows were written to `path`.
    Exported {
        records: Vec<ProductRecord>,
        path: PathBuf,
    },
    /// The site has fewer pages than requested; nothing was written.
    InsufficientPages { requested: u32, available: u32 },
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::Exported { records, path } => {
                write!(f, "wrote {} rows to {}", records.len(), path.display())
            }
            RunOutcome::InsufficientPages { available, .. } => {
                write!(f, "There are only {available} pages for this keyword")
            }
        }
    }
}

/// Drives one browser through a keyword's listing pages.
///
/// The scraper owns the browser handle for its whole life. [`Self::run`] and
/// [`Self::scrape`] consume the scraper and release the browser on every exit
/// path, including errors.
pub struct PageScraper<D: PageDriver> {
    driver: D,
    profile: SiteProfile,
    options: ScrapeOptions,
}

impl<D: PageDriver> PageScraper<D> {
    #[must_use]
    pub fn new(driver: D, profile: SiteProfile, options: ScrapeOptions) -> Self {
        Self {
            driver,
            profile,
            options,
        }
    }

    /// Opens the listing for `keyword` and reads how many pages it has.
    ///
    /// A missing or unreadable pagination indicator is logged and counted as
    /// zero pages, which [`Self::run`] then reports as insufficient.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidRequest`] for a blank keyword or zero pages.
    /// - Navigation and session-level WebDriver failures.
    pub async fn initialize(
        &mut self,
        keyword: &str,
        requested_pages: u32,
    ) -> Result<ScrapeSession, ScraperError> {
        if keyword.trim().is_empty() {
            return Err(ScraperError::InvalidRequest {
                reason: "keyword must not be empty".to_owned(),
            });
        }
        if requested_pages == 0 {
            return Err(ScraperError::InvalidRequest {
                reason: "at least one page must be requested".to_owned(),
            });
        }

        let url = self.profile.listing_url_for(keyword);
        tracing::info!(keyword, %url, requested_pages, "opening listing");
        self.driver.goto(&url).await?;

        let total = self.read_page_total().await?;
        tracing::info!(keyword, total_pages = total, "listing opened");
        Ok(ScrapeSession::new(keyword, requested_pages, total))
    }

    async fn read_page_total(&mut self) -> Result<u32, ScraperError> {
        match self.driver.text_at(&self.profile.page_total).await {
            Ok(text) => {
                if let Some(total) = parse_page_total(&text) {
                    Ok(total)
                } else {
                    tracing::warn!(
                        text = %text,
                        "pagination indicator has no page number; assuming 0 pages"
                    );
                    Ok(0)
                }
            }
            Err(err) if err.is_field_recoverable() => {
                tracing::warn!(error = %err, "pagination control not found; assuming 0 pages");
                Ok(0)
            }
            Err(err) => Err(err),
        }
    }

    /// Visits every requested page, exports the rows, and releases the
    /// browser.
    ///
    /// # Errors
    ///
    /// Returns the first session-level failure: a missing next-page anchor,
    /// a lost WebDriver session, or a CSV write error. The browser is
    /// released before the error is returned.
    pub async fn run(mut self, session: ScrapeSession) -> Result<RunOutcome, ScraperError> {
        let result = self.visit_and_export(session).await;
        let released = self.release().await;
        settle(result, released)
    }

    /// [`Self::initialize`] followed by [`Self::run`], releasing the browser
    /// even when initialization fails.
    ///
    /// # Errors
    ///
    /// See [`Self::initialize`] and [`Self::run`].
    pub async fn scrape(
        mut self,
        keyword: &str,
        requested_pages: u32,
    ) -> Result<RunOutcome, ScraperError> {
        match self.initialize(keyword, requested_pages).await {
            Ok(session) => self.run(session).await,
            Err(err) => {
                let released = self.release().await;
                settle(Err(err), released)
            }
        }
    }

    async fn visit_and_export(
        &mut self,
        mut session: ScrapeSession,
    ) -> Result<RunOutcome, ScraperError> {
        if !session.has_enough_pages() {
            let outcome = RunOutcome::InsufficientPages {
                requested: session.requested_pages(),
                available: session.total_available_pages(),
            };
            tracing::info!(
                keyword = session.keyword(),
                requested = session.requested_pages(),
                available = session.total_available_pages(),
                "not enough pages for keyword; skipping export"
            );
            return Ok(outcome);
        }

        self.extract_page(&mut session).await?;
        for _ in 1..session.requested_pages() {
            let next_page = session.current_page_index().saturating_add(1);
            let anchor = self.profile.next_page_locator(next_page);
            self.driver.click(&anchor).await?;
            session.advance_page();
            self.extract_page(&mut session).await?;
        }

        let path = self.options.output_path.clone();
        write_csv(&path, session.records())?;
        Ok(RunOutcome::Exported {
            records: session.into_records(),
            path,
        })
    }

    /// Refreshes the current page and appends one record per product card.
    /// Returns the number of cards read.
    ///
    /// # Errors
    ///
    /// Field-level failures never surface here; only refresh, card lookup,
    /// and session-level errors do.
    pub async fn extract_page(
        &mut self,
        session: &mut ScrapeSession,
    ) -> Result<usize, ScraperError> {
        self.driver.refresh().await?;
        let items = self.driver.find_items(&self.profile.item_class).await?;

        for (offset, item) in items.iter().enumerate() {
            let record = self.read_card(item, offset + 1).await?;
            session.push(record);
        }

        tracing::info!(
            keyword = session.keyword(),
            page = session.current_page_index(),
            items = items.len(),
            "page extracted"
        );
        Ok(items.len())
    }

    /// Builds one record from the card at 1-based `position`. Every field is
    /// attempted, in column order, regardless of how the others went.
    async fn read_card(
        &mut self,
        item: &D::Item,
        position: usize,
    ) -> Result<ProductRecord, ScraperError> {
        let mut record = ProductRecord::default();
        for field in ProductField::ALL {
            let xpath = self
                .profile
                .field_locator(field, position)
                .ok_or(ScraperError::MissingSelector { field })?;
            let text = read_field_or_default(
                &mut self.driver,
                item,
                field,
                position,
                &xpath,
                self.options.field_wait,
            )
            .await?;
            record.set(field, text);
        }
        Ok(record)
    }

    async fn release(self) -> Result<(), ScraperError> {
        self.driver.release(self.options.release_mode).await
    }
}

/// Combines the run result with the release result. A run error wins; a
/// release failure after a clean run is reported on its own.
fn settle(
    result: Result<RunOutcome, ScraperError>,
    released: Result<(), ScraperError>,
) -> Result<RunOutcome, ScraperError> {
    match (result, released) {
        (Ok(outcome), Ok(())) => Ok(outcome),
        (Ok(_), Err(release_err)) => Err(release_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(release_err)) => {
            tracing::warn!(error = %release_err, "browser release failed after run error");
            Err(err)
        }
    }
}
