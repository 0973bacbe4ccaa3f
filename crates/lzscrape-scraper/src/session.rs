use lzscrape_core::ProductRecord;

/// State of one keyword scrape, from the first listing page to export.
///
/// `records` only grows: rows are appended as cards are read and are never
/// edited or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeSession {
    keyword: String,
    requested_pages: u32,
    current_page_index: u32,
    total_available_pages: u32,
    records: Vec<ProductRecord>,
}

impl ScrapeSession {
    /// A fresh session positioned on page 1.
    #[must_use]
    pub fn new(keyword: &str, requested_pages: u32, total_available_pages: u32) -> Self {
        Self {
            keyword: keyword.to_owned(),
            requested_pages,
            current_page_index: 1,
            total_available_pages,
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn requested_pages(&self) -> u32 {
        self.requested_pages
    }

    #[must_use]
    pub fn current_page_index(&self) -> u32 {
        self.current_page_index
    }

    #[must_use]
    pub fn total_available_pages(&self) -> u32 {
        self.total_available_pages
    }

    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// `true` when the site has at least as many pages as were requested.
    #[must_use]
    pub fn has_enough_pages(&self) -> bool {
        self.requested_pages <= self.total_available_pages
    }

    pub(crate) fn push(&mut self, record: ProductRecord) {
        self.records.push(record);
    }

    /// Moves to the next page and returns its 1-based index.
    pub(crate) fn advance_page(&mut self) -> u32 {
        self.current_page_index = self.current_page_index.saturating_add(1);
        self.current_page_index
    }

    /// Ends the session, handing over the collected rows.
    #[must_use]
    pub fn into_records(self) -> Vec<ProductRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_on_first_page_with_no_records() {
        let session = ScrapeSession::new("protein powder", 5, 20);
        assert_eq!(session.keyword(), "protein powder");
        assert_eq!(session.requested_pages(), 5);
        assert_eq!(session.current_page_index(), 1);
        assert_eq!(session.total_available_pages(), 20);
        assert!(session.records().is_empty());
    }

    #[test]
    fn has_enough_pages_compares_requested_to_available() {
        assert!(ScrapeSession::new("k", 5, 20).has_enough_pages());
        assert!(ScrapeSession::new("k", 20, 20).has_enough_pages());
        assert!(!ScrapeSession::new("k", 5, 1).has_enough_pages());
        assert!(!ScrapeSession::new("k", 1, 0).has_enough_pages());
    }

    #[test]
    fn advance_page_increments_by_one() {
        let mut session = ScrapeSession::new("k", 3, 3);
        assert_eq!(session.advance_page(), 2);
        assert_eq!(session.advance_page(), 3);
        assert_eq!(session.current_page_index(), 3);
    }

    #[test]
    fn records_keep_append_order() {
        let mut session = ScrapeSession::new("k", 1, 1);
        for title in ["a", "b", "c"] {
            session.push(ProductRecord {
                title: title.to_owned(),
                ..ProductRecord::default()
            });
        }
        let titles: Vec<String> = session
            .into_records()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }
}
