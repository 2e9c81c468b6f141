pub mod selectors;
pub mod webdriver;

use crate::error::ScrapeError;
use std::fmt;
use std::time::Duration;

/// Why reading a value from a result entry failed
///
/// Read failures are never fatal; the extractor decides per field whether
/// a failure drops the entry or just leaves the field empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError {
    reason: String,
}

impl ReadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for ReadError {}

impl From<fantoccini::error::CmdError> for ReadError {
    fn from(error: fantoccini::error::CmdError) -> Self {
        ReadError::new(error.to_string())
    }
}

/// Outcome of trying to move to the next results page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTurn {
    /// The next page is loaded and ready to be read
    Advanced,
    /// The page has no next-page control
    NoNextControl,
    /// The next-page control exists but is disabled
    NextDisabled,
}

/// A single product card on a search-results page
#[allow(async_fn_in_trait)]
pub trait ResultEntry {
    /// Whether the card is a paid placement
    async fn is_sponsored(&self) -> Result<bool, ReadError>;

    /// Trimmed title text, `None` when the card has no non-empty title
    async fn title(&self) -> Result<Option<String>, ReadError>;

    /// Trimmed display price, `None` when the card shows none
    async fn price(&self) -> Result<Option<String>, ReadError>;
}

/// The browser primitives a search run needs from a single open page
#[allow(async_fn_in_trait)]
pub trait SearchPage {
    type Entry: ResultEntry;

    /// Load `url`, failing if it takes longer than `timeout`
    async fn goto(&self, url: &str, timeout: Duration) -> Result<(), ScrapeError>;

    /// Wait until an element matching `selector` exists
    async fn wait_for_selector(&self, selector: &str, timeout: Duration)
    -> Result<(), ScrapeError>;

    /// Replace the contents of the input at `selector` with `text` and press Enter
    async fn fill_and_submit(&self, selector: &str, text: &str) -> Result<(), ScrapeError>;

    /// Scroll to the bottom of the document, returning its scroll height
    async fn scroll_to_bottom(&self) -> Result<u64, ReadError>;

    /// Current scroll height of the document
    async fn document_height(&self) -> Result<u64, ReadError>;

    /// All result entries on the page, in document order
    async fn result_entries(&self) -> Result<Vec<Self::Entry>, ReadError>;

    /// Click the next-page control and wait up to `timeout` for the new page
    async fn next_page(&self, timeout: Duration) -> Result<PageTurn, ScrapeError>;

    /// End the browser session
    async fn close(self) -> Result<(), ScrapeError>
    where
        Self: Sized;
}
