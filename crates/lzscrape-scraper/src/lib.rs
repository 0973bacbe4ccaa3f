pub mod driver;
pub mod error;
pub mod export;
pub mod field;
pub mod pagination;
pub mod scraper;
pub mod session;

pub use driver::{FieldWait, PageDriver, ReleaseMode, WebDriverSession};
pub use error::ScraperError;
pub use export::{render_table, write_csv};
pub use scraper::{PageScraper, RunOutcome, ScrapeOptions};
pub use session::ScrapeSession;
