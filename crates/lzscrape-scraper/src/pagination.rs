//! Reading the listing's page count from the pagination control.
//!
//! The last numbered entry of the pagination list shows the total page
//! count as plain text (`"20"`). Large result sets may render grouping
//! separators (`"1,024"`); surrounding whitespace and labels are ignored.

use std::sync::LazyLock;

use regex::Regex;

static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*").expect("valid page number regex"));

/// Extracts the first page number from the pagination indicator text.
///
/// Returns `None` when the text carries no number or it does not fit a `u32`.
#[must_use]
pub fn parse_page_total(text: &str) -> Option<u32> {
    let digits: String = PAGE_NUMBER
        .find(text)?
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse::<u32>().ok()
}
