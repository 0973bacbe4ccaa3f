//! Fallible per-field lookup.
//!
//! A product card renders some fields only some of the time (no discount,
//! no reviews yet) and the listing re-renders while it is being read. Each
//! field is therefore read on its own: element-level failures degrade that
//! field to the empty string and leave the rest of the card alone.

use lzscrape_core::ProductField;

use crate::driver::{FieldWait, PageDriver};
use crate::error::ScraperError;

/// Keeps a successful read, turns a recoverable element failure into the
/// empty string, and passes every other error through.
///
/// # Errors
///
/// Returns `result`'s error unchanged when it is not
/// [`ScraperError::is_field_recoverable`].
pub fn or_empty(result: Result<String, ScraperError>) -> Result<String, ScraperError> {
    match result {
        Ok(text) => Ok(text),
        Err(err) if err.is_field_recoverable() => Ok(String::new()),
        Err(err) => Err(err),
    }
}

/// Waits for `xpath` within `item` and reads its text, falling back to the
/// empty string on not-found, stale or timed-out elements.
///
/// `position` is the 1-based card index, used only for logging.
///
/// # Errors
///
/// Propagates WebDriver failures that are not element-level (for example a
/// lost browser session).
pub async fn read_field_or_default<D: PageDriver>(
    driver: &mut D,
    item: &D::Item,
    field: ProductField,
    position: usize,
    xpath: &str,
    wait: FieldWait,
) -> Result<String, ScraperError> {
    let result = driver.wait_for_text(item, xpath, wait).await;
    if let Err(err) = &result {
        if err.is_field_recoverable() {
            tracing::debug!(%field, item = position, error = %err, "field unavailable; left empty");
        }
    }
    or_empty(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_empty_keeps_text() {
        assert_eq!(or_empty(Ok("₱499.00".to_owned())).unwrap(), "₱499.00");
    }

    #[test]
    fn or_empty_absorbs_element_failures() {
        for err in [
            ScraperError::ElementNotFound {
                locator: "//a".to_owned(),
            },
            ScraperError::StaleElement {
                locator: "//a".to_owned(),
            },
            ScraperError::WaitTimeout {
                locator: "//a".to_owned(),
                timeout_secs: 3,
            },
        ] {
            assert_eq!(or_empty(Err(err)).unwrap(), "");
        }
    }

    #[test]
    fn or_empty_propagates_other_errors() {
        let result = or_empty(Err(ScraperError::InvalidRequest {
            reason: "session lost".to_owned(),
        }));
        assert!(matches!(result, Err(ScraperError::InvalidRequest { .. })));
    }
}
