use super::selectors;
use super::{PageTurn, ReadError, ResultEntry, SearchPage};
use crate::error::ScrapeError;
use crate::utils::clean_text;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::key::Key;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{Map, Value, json};
use std::time::Duration;
use tokio::time::{sleep, timeout};

const SCROLL_TO_BOTTOM: &str = r#"
const el = document.scrollingElement || document.documentElement || document.body;
if (el) {
    window.scrollTo(0, el.scrollHeight);
    return el.scrollHeight;
}
return 0;
"#;

const DOCUMENT_HEIGHT: &str = r#"
const el = document.scrollingElement || document.documentElement || document.body;
return el ? el.scrollHeight : 0;
"#;

const READY_STATE: &str = "return document.readyState;";

/// Endpoints tried when the configured WebDriver URL does not answer
const FALLBACK_WEBDRIVER_URLS: [&str; 3] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4444", // geckodriver / Selenium default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// A search page driven through a WebDriver session
pub struct WebDriverPage {
    client: Client,
}

/// A product card located through WebDriver
pub struct WebDriverEntry {
    element: Element,
}

/// Session capabilities for Chrome and Firefox drivers
pub fn capabilities(headless: bool) -> Map<String, Value> {
    let mut chrome_args = vec!["--window-size=1920,1080", "--disable-dev-shm-usage"];
    let mut firefox_args = vec!["--width=1920", "--height=1080"];
    if headless {
        chrome_args.push("--headless=new");
        firefox_args.push("--headless");
    }

    let mut caps = Map::new();
    caps.insert("goog:chromeOptions".to_string(), json!({ "args": chrome_args }));
    caps.insert("moz:firefoxOptions".to_string(), json!({ "args": firefox_args }));
    caps
}

impl WebDriverPage {
    /// Open a new browser session through the WebDriver server at `webdriver_url`
    pub async fn launch(webdriver_url: &str, headless: bool) -> Result<Self, ScrapeError> {
        ::log::info!("Launching browser (headless: {})...", headless);

        let first_error = match connect(webdriver_url, headless).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Ok(Self { client });
            }
            Err(e) => {
                ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
                e
            }
        };

        for url in FALLBACK_WEBDRIVER_URLS.iter() {
            if *url == webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = connect(url, headless).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(Self { client });
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(ScrapeError::Connect {
            url: webdriver_url.to_string(),
            reason: first_error,
        })
    }

    async fn execute_u64(&self, script: &str) -> Result<u64, ReadError> {
        let value = self.client.execute(script, Vec::new()).await?;
        Ok(value.as_f64().map(|height| height as u64).unwrap_or(0))
    }

    async fn ready_state(&self) -> Result<String, CmdError> {
        let value = self.client.execute(READY_STATE, Vec::new()).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Wait until the URL has moved away from `previous` and the DOM is parsed
    async fn wait_for_navigation(&self, previous: &url::Url) -> Result<(), CmdError> {
        loop {
            let current = self.client.current_url().await?;
            if current != *previous && self.ready_state().await? != "loading" {
                ::log::debug!("Loaded {}", current);
                return Ok(());
            }
            sleep(LOAD_POLL_INTERVAL).await;
        }
    }
}

async fn connect(webdriver_url: &str, headless: bool) -> Result<Client, String> {
    ClientBuilder::native()
        .capabilities(capabilities(headless))
        .connect(webdriver_url)
        .await
        .map_err(|e| e.to_string())
}

fn wait_error(error: CmdError, what: &str, after: Duration) -> ScrapeError {
    match error {
        CmdError::WaitTimeout => ScrapeError::timeout(what, after),
        other => ScrapeError::Browser(other),
    }
}

/// First element under `element` matching `selector`, if any
async fn first_match(element: &Element, selector: &str) -> Result<Option<Element>, ReadError> {
    let mut found = element.find_all(Locator::Css(selector)).await?;
    if found.is_empty() {
        Ok(None)
    } else {
        Ok(Some(found.swap_remove(0)))
    }
}

impl ResultEntry for WebDriverEntry {
    async fn is_sponsored(&self) -> Result<bool, ReadError> {
        let markers = self
            .element
            .find_all(Locator::XPath(selectors::SPONSORED_MARKER))
            .await?;
        Ok(!markers.is_empty())
    }

    async fn title(&self) -> Result<Option<String>, ReadError> {
        match first_match(&self.element, selectors::ENTRY_TITLE).await? {
            Some(title) => Ok(clean_text(&title.text().await?)),
            None => Ok(None),
        }
    }

    async fn price(&self) -> Result<Option<String>, ReadError> {
        // The offscreen span is not rendered, so its visible text is empty
        match first_match(&self.element, selectors::ENTRY_PRICE).await? {
            Some(price) => Ok(price
                .prop("textContent")
                .await?
                .as_deref()
                .and_then(clean_text)),
            None => Ok(None),
        }
    }
}

impl SearchPage for WebDriverPage {
    type Entry = WebDriverEntry;

    async fn goto(&self, url: &str, limit: Duration) -> Result<(), ScrapeError> {
        ::log::info!("Navigating to {}", url);
        match timeout(limit, self.client.goto(url)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(ScrapeError::Navigation {
                url: url.to_string(),
                source,
            }),
            Err(_) => Err(ScrapeError::timeout(format!("{} to load", url), limit)),
        }
    }

    async fn wait_for_selector(&self, selector: &str, limit: Duration) -> Result<(), ScrapeError> {
        ::log::debug!("Waiting up to {:?} for {}", limit, selector);
        self.client
            .wait()
            .at_most(limit)
            .for_element(Locator::Css(selector))
            .await
            .map(|_| ())
            .map_err(|e| wait_error(e, selector, limit))
    }

    async fn fill_and_submit(&self, selector: &str, text: &str) -> Result<(), ScrapeError> {
        let input = self.client.find(Locator::Css(selector)).await?;
        input.clear().await?;
        input.send_keys(text).await?;
        input.send_keys(&char::from(Key::Enter).to_string()).await?;
        Ok(())
    }

    async fn scroll_to_bottom(&self) -> Result<u64, ReadError> {
        self.execute_u64(SCROLL_TO_BOTTOM).await
    }

    async fn document_height(&self) -> Result<u64, ReadError> {
        self.execute_u64(DOCUMENT_HEIGHT).await
    }

    async fn result_entries(&self) -> Result<Vec<Self::Entry>, ReadError> {
        let elements = self
            .client
            .find_all(Locator::Css(selectors::RESULT_ENTRY))
            .await?;
        Ok(elements
            .into_iter()
            .map(|element| WebDriverEntry { element })
            .collect())
    }

    async fn next_page(&self, limit: Duration) -> Result<PageTurn, ScrapeError> {
        let mut controls = self
            .client
            .find_all(Locator::Css(selectors::NEXT_PAGE))
            .await?;
        if controls.is_empty() {
            return Ok(PageTurn::NoNextControl);
        }
        let next = controls.swap_remove(0);

        let class_attr = next.attr("class").await?.unwrap_or_default();
        if selectors::is_disabled_class(&class_attr) {
            return Ok(PageTurn::NextDisabled);
        }

        let previous = self.client.current_url().await?;
        next.click().await?;

        match timeout(limit, self.wait_for_navigation(&previous)).await {
            Ok(Ok(())) => Ok(PageTurn::Advanced),
            Ok(Err(e)) => Err(ScrapeError::Browser(e)),
            Err(_) => Err(ScrapeError::timeout("next results page to load", limit)),
        }
    }

    async fn close(self) -> Result<(), ScrapeError> {
        self.client.close().await?;
        ::log::debug!("Browser session closed");
        Ok(())
    }
}
