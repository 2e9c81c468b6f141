use std::time::Duration;
use thiserror::Error;

/// Fatal conditions that end a scraping run.
///
/// Everything recoverable (sponsored entries, unreadable titles or prices,
/// a missing next-page control) is logged where it happens and never turns
/// into one of these.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// No WebDriver session could be opened
    #[error("failed to connect to WebDriver at {url}: {reason}")]
    Connect { url: String, reason: String },

    /// The browser could not load the target site
    #[error("failed to navigate to {url}: {source}")]
    Navigation {
        url: String,
        #[source]
        source: fantoccini::error::CmdError,
    },

    /// One of the bounded waits elapsed
    #[error("timed out after {}s waiting for {what}", .after.as_secs_f64())]
    Timeout { what: String, after: Duration },

    /// Any other WebDriver command failure
    #[error("browser command failed: {0}")]
    Browser(#[from] fantoccini::error::CmdError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Shorthand for a timeout on a named wait point
    pub fn timeout(what: impl Into<String>, after: Duration) -> Self {
        ScrapeError::Timeout {
            what: what.into(),
            after,
        }
    }
}
