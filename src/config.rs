use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Largest number of result entries read from a single page
pub const MAX_ITEMS_PER_PAGE: usize = 16;

/// Hard ceiling on the number of result pages visited in one run
pub const DEFAULT_MAX_PAGES: usize = 100;

/// Bounds of the intended `items_requested` range
pub const MIN_ITEMS_REQUESTED: i64 = 1;
pub const MAX_ITEMS_REQUESTED: i64 = 100;

/// Environment variable that overrides the default WebDriver endpoint
pub const WEBDRIVER_URL_ENV: &str = "WEBDRIVER_URL";

/// How hard the extractor tries to make lazily rendered results appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LazyLoadPolicy {
    /// Scroll-to-bottom attempts per page
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// How long one attempt waits for the document to grow
    #[serde(default = "default_settle_timeout_ms")]
    pub settle_timeout_ms: u64,

    /// Interval between document height checks
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl LazyLoadPolicy {
    /// A policy that never scrolls
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self {
            max_attempts: 0,
            settle_timeout_ms: 0,
            poll_interval_ms: 0,
        }
    }

    pub fn settle_timeout(&self) -> Duration {
        Duration::from_millis(self.settle_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for LazyLoadPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            settle_timeout_ms: default_settle_timeout_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

/// Configuration for a single search run, fixed once built
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Site to open before searching
    #[serde(default = "default_website")]
    pub website: String,

    /// Text typed into the search box
    #[serde(default = "default_query")]
    pub query: String,

    /// Number of items to collect; out-of-range values are logged, not rejected
    #[serde(default = "default_items_requested")]
    pub items_requested: i64,

    /// Where the collected items are written
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Run the browser without a visible window
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Page ceiling for the pagination loop
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Timeout for the initial page load
    #[serde(default = "default_wait_secs")]
    pub navigation_timeout_secs: u64,

    /// Timeout for the search box to appear
    #[serde(default = "default_wait_secs")]
    pub search_box_timeout_secs: u64,

    /// Timeout for the first result entry to appear
    #[serde(default = "default_wait_secs")]
    pub results_timeout_secs: u64,

    /// Timeout for a results page reached through the next-page control
    #[serde(default = "default_page_load_timeout_secs")]
    pub page_load_timeout_secs: u64,

    #[serde(default)]
    pub lazy_load: LazyLoadPolicy,
}

fn default_max_attempts() -> usize {
    3
}

fn default_settle_timeout_ms() -> u64 {
    1500
}

fn default_poll_interval_ms() -> u64 {
    250
}

pub fn default_website() -> String {
    "https://www.amazon.de".to_string()
}

pub fn default_query() -> String {
    "harry potter buch".to_string()
}

pub fn default_items_requested() -> i64 {
    37
}

pub fn default_output_path() -> String {
    "collected_items.json".to_string()
}

fn default_headless() -> bool {
    true
}

/// Default value for webdriver_url
pub fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

fn default_wait_secs() -> u64 {
    60
}

fn default_page_load_timeout_secs() -> u64 {
    30
}

/// Pick the WebDriver endpoint: explicit value, then environment, then default
pub fn resolve_webdriver_url(explicit: Option<&str>, env_value: Option<&str>) -> String {
    explicit
        .filter(|url| !url.is_empty())
        .or(env_value.filter(|url| !url.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(default_webdriver_url)
}

/// Whether a requested item count lies in the intended range
pub fn items_requested_in_range(items_requested: i64) -> bool {
    (MIN_ITEMS_REQUESTED..=MAX_ITEMS_REQUESTED).contains(&items_requested)
}

impl RunConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            website: default_website(),
            query: default_query(),
            items_requested: default_items_requested(),
            output_path: default_output_path(),
            headless: default_headless(),
            webdriver_url: default_webdriver_url(),
            max_pages: default_max_pages(),
            navigation_timeout_secs: default_wait_secs(),
            search_box_timeout_secs: default_wait_secs(),
            results_timeout_secs: default_wait_secs(),
            page_load_timeout_secs: default_page_load_timeout_secs(),
            lazy_load: LazyLoadPolicy::default(),
        }
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    pub fn search_box_timeout(&self) -> Duration {
        Duration::from_secs(self.search_box_timeout_secs)
    }

    pub fn results_timeout(&self) -> Duration {
        Duration::from_secs(self.results_timeout_secs)
    }

    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}
