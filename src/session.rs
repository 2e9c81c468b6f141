use crate::browser::webdriver::WebDriverPage;
use crate::browser::{SearchPage, selectors};
use crate::config::RunConfig;
use crate::error::ScrapeError;
use crate::pagination::{self, PaginationLimits};
use crate::results::ItemRecord;

/// Runs a complete search in a fresh WebDriver session.
///
/// Launches the browser, searches, collects results and closes the session.
pub async fn run(config: &RunConfig) -> Result<Vec<ItemRecord>, ScrapeError> {
    if let Some(notice) = headless_notice(config.headless) {
        ::log::info!("{}", notice);
    }
    let page = WebDriverPage::launch(&config.webdriver_url, config.headless).await?;
    run_on(page, config).await
}

/// Startup notice for headless runs, which used to always show a window
pub fn headless_notice(headless: bool) -> Option<&'static str> {
    if headless {
        Some(
            "Running headless: earlier versions always showed the browser window \
             regardless of --silent_mode; pass --silent_mode false to see it",
        )
    } else {
        None
    }
}

/// Runs a complete search on an already opened page, taking ownership of it.
///
/// The page is closed once the results are collected. On a fatal error the
/// page is still closed before the error is returned.
pub async fn run_on<P: SearchPage>(
    page: P,
    config: &RunConfig,
) -> Result<Vec<ItemRecord>, ScrapeError> {
    let outcome = search_and_collect(&page, config).await;

    match outcome {
        Ok(items) => {
            page.close().await?;
            ::log::info!("Total items collected: {}", items.len());
            Ok(items)
        }
        Err(e) => {
            if let Err(close_err) = page.close().await {
                ::log::warn!("Failed to close browser after error: {}", close_err);
            }
            Err(e)
        }
    }
}

async fn search_and_collect<P: SearchPage>(
    page: &P,
    config: &RunConfig,
) -> Result<Vec<ItemRecord>, ScrapeError> {
    page.goto(&config.website, config.navigation_timeout()).await?;

    page.wait_for_selector(selectors::SEARCH_BOX, config.search_box_timeout())
        .await?;
    ::log::info!("Searching for '{}'", config.query);
    page.fill_and_submit(selectors::SEARCH_BOX, &config.query)
        .await?;

    page.wait_for_selector(selectors::RESULT_ENTRY, config.results_timeout())
        .await?;

    let limits = PaginationLimits {
        max_pages: config.max_pages,
        page_load_timeout: config.page_load_timeout(),
    };
    pagination::paginate(page, config.items_requested, limits, &config.lazy_load).await
}
