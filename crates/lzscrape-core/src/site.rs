//! Site profile: every locator the scraper relies on, kept as data.
//!
//! The listing site is driven through fixed positional XPaths. They are a
//! contract with the site's current markup, so they live here rather than in
//! the extraction logic; a markup change means editing the table (or a YAML
//! override file), not the scraper.
//!
//! ## Placeholders
//!
//! - `{keyword}` in `listing_url`: the normalized search keyword.
//! - `{item}` in field XPaths: 1-based position of the product card.
//! - `{index}` in `next_page_anchor`: pagination list index of the target page.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::products::ProductField;
use crate::ConfigError;

const LISTING_ROOT: &str = r#"//*[@id="root"]/div/div[2]/div[1]/div/div[1]"#;

/// Locator for one product field, relative to the card position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    pub field: ProductField,
    /// XPath template containing `{item}`.
    pub xpath: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Listing URL template containing `{keyword}`.
    pub listing_url: String,
    /// Class name carried by every product card container.
    pub item_class: String,
    /// XPath of the pagination entry that shows the last page number.
    pub page_total: String,
    /// XPath template containing `{index}` for a pagination anchor.
    pub next_page_anchor: String,
    /// Added to a page number to get its `{index}` in the pagination list.
    /// The list opens with a "previous" arrow, so page 2 sits at `li[3]`.
    #[serde(default = "default_anchor_offset")]
    pub anchor_offset: u32,
    pub fields: Vec<FieldSelector>,
}

fn default_anchor_offset() -> u32 {
    1
}

impl Default for SiteProfile {
    /// Layout of the Lazada Philippines tag listing.
    fn default() -> Self {
        let card = format!("{LISTING_ROOT}/div[2]/div[{{item}}]/div/div/div[2]");
        let field = |field: ProductField, tail: &str| FieldSelector {
            field,
            xpath: format!("{card}/{tail}"),
        };

        Self {
            listing_url: "https://www.lazada.com.ph/tag/{keyword}/".to_string(),
            item_class: "Bm3ON".to_string(),
            page_total: format!("{LISTING_ROOT}/div[3]/div/ul/li[8]"),
            next_page_anchor: format!("{LISTING_ROOT}/div[3]/div/ul/li[{{index}}]/a"),
            anchor_offset: default_anchor_offset(),
            fields: vec![
                field(ProductField::Title, "div[2]/a"),
                field(ProductField::Price, "div[3]/span"),
                field(ProductField::SellerLocation, "div[5]/span[2]"),
                field(ProductField::Discount, "div[4]/span"),
                field(ProductField::ProductsSold, "div[5]/span[1]/span[1]"),
                field(ProductField::NumberOfReviews, "div[5]/div/span"),
            ],
        }
    }
}

impl SiteProfile {
    /// Listing URL for `keyword`, after [`normalize_keyword`].
    #[must_use]
    pub fn listing_url_for(&self, keyword: &str) -> String {
        self.listing_url.replace("{keyword}", &normalize_keyword(keyword))
    }

    /// XPath of `field` inside the card at 1-based position `item`.
    ///
    /// Returns `None` if the profile has no selector for `field`; a
    /// validated profile always has one.
    #[must_use]
    pub fn field_locator(&self, field: ProductField, item: usize) -> Option<String> {
        self.fields
            .iter()
            .find(|s| s.field == field)
            .map(|s| s.xpath.replace("{item}", &item.to_string()))
    }

    /// XPath of the pagination anchor that opens `page` (1-based).
    #[must_use]
    pub fn next_page_locator(&self, page: u32) -> String {
        let index = page.saturating_add(self.anchor_offset);
        self.next_page_anchor.replace("{index}", &index.to_string())
    }

    /// Checks that the profile can drive a full run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when a placeholder is missing, the
    /// item class is blank, or the field list does not name each
    /// [`ProductField`] exactly once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.listing_url.contains("{keyword}") {
            return Err(ConfigError::Validation(
                "listing_url must contain {keyword}".to_string(),
            ));
        }
        if self.item_class.trim().is_empty() {
            return Err(ConfigError::Validation(
                "item_class must be non-empty".to_string(),
            ));
        }
        if self.page_total.trim().is_empty() {
            return Err(ConfigError::Validation(
                "page_total must be non-empty".to_string(),
            ));
        }
        if !self.next_page_anchor.contains("{index}") {
            return Err(ConfigError::Validation(
                "next_page_anchor must contain {index}".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for selector in &self.fields {
            if !seen.insert(selector.field) {
                return Err(ConfigError::Validation(format!(
                    "duplicate selector for field '{}'",
                    selector.field
                )));
            }
            if !selector.xpath.contains("{item}") {
                return Err(ConfigError::Validation(format!(
                    "selector for field '{}' must contain {{item}}",
                    selector.field
                )));
            }
        }

        if let Some(missing) = ProductField::ALL.iter().find(|f| !seen.contains(*f)) {
            return Err(ConfigError::Validation(format!(
                "missing selector for field '{missing}'"
            )));
        }

        Ok(())
    }
}

/// Normalize a free-text search keyword for the listing URL: spaces become
/// hyphens (`"protein powder"` → `"protein-powder"`).
#[must_use]
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().replace(' ', "-")
}

/// Load and validate a site profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_site_profile(path: &Path) -> Result<SiteProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SiteProfileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let profile: SiteProfile = serde_yaml::from_str(&content)?;
    profile.validate()?;

    Ok(profile)
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;
