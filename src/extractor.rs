use crate::browser::{ResultEntry, SearchPage};
use crate::config::{LazyLoadPolicy, MAX_ITEMS_PER_PAGE};
use crate::results::ItemRecord;
use crate::utils::log_preview;
use tokio::time::{Instant, sleep};

/// Collects up to `max_items` non-sponsored products from the current page.
///
/// `max_items` must lie in `1..=16`; anything else is logged and yields an
/// empty result without touching the page. Entries that are sponsored or
/// have no readable title are skipped; a missing or unreadable price leaves
/// the record's price empty.
///
/// # Arguments
///
/// * `page` - Page showing search results
/// * `max_items` - Cap on records returned from this page
/// * `policy` - How long to wait for lazily rendered results
pub async fn extract<P: SearchPage>(
    page: &P,
    max_items: usize,
    policy: &LazyLoadPolicy,
) -> Vec<ItemRecord> {
    let mut items = Vec::new();

    if max_items == 0 || max_items > MAX_ITEMS_PER_PAGE {
        ::log::error!(
            "Invalid number of items requested from one page: {} (expected 1..={})",
            max_items,
            MAX_ITEMS_PER_PAGE
        );
        return items;
    }

    settle_lazy_content(page, policy).await;

    let entries = match page.result_entries().await {
        Ok(entries) => entries,
        Err(e) => {
            ::log::error!("Failed to locate result entries: {}", e);
            return items;
        }
    };
    ::log::debug!("Found {} result entries on page", entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if items.len() >= max_items {
            ::log::debug!("Required amount of {} reached, stopping", max_items);
            return items;
        }

        match entry.is_sponsored().await {
            Ok(true) => {
                ::log::info!("Sponsored item found at index {}, skipping", index);
                continue;
            }
            Ok(false) => {}
            Err(e) => {
                ::log::debug!(
                    "Could not check entry {} for a sponsored marker: {}. Skipping",
                    index,
                    e
                );
                continue;
            }
        }

        let title = match entry.title().await {
            Ok(Some(title)) => title,
            Ok(None) => {
                ::log::debug!("No title found at index {}. Skipping", index);
                continue;
            }
            Err(e) => {
                ::log::debug!("Failed to read title text at index {}: {}", index, e);
                continue;
            }
        };

        let price = match entry.price().await {
            Ok(price) => price,
            Err(e) => {
                ::log::debug!("Failed to read price for '{}': {}", log_preview(&title), e);
                None
            }
        };
        if price.is_none() {
            ::log::debug!("No price found for '{}'", log_preview(&title));
        }

        ::log::info!("New item found: {}", log_preview(&title));
        items.push(ItemRecord::new(title, price));
    }

    items
}

/// Scrolls to the bottom until the document stops growing.
///
/// Best effort: a failed scroll or height read ends settling early.
async fn settle_lazy_content<P: SearchPage>(page: &P, policy: &LazyLoadPolicy) {
    for attempt in 1..=policy.max_attempts {
        let height = match page.scroll_to_bottom().await {
            Ok(height) => height,
            Err(e) => {
                ::log::debug!("Scroll attempt {} failed: {}", attempt, e);
                return;
            }
        };

        if !wait_for_growth(page, height, policy).await {
            ::log::debug!(
                "Document height settled at {} after {} scroll attempt(s)",
                height,
                attempt
            );
            return;
        }
    }
}

/// Polls the document height until it exceeds `height` or the settle timeout passes
async fn wait_for_growth<P: SearchPage>(page: &P, height: u64, policy: &LazyLoadPolicy) -> bool {
    let deadline = Instant::now() + policy.settle_timeout();
    loop {
        match page.document_height().await {
            Ok(current) if current > height => return true,
            Ok(_) => {}
            Err(e) => {
                ::log::debug!("Failed to read document height: {}", e);
                return false;
            }
        }

        if Instant::now() >= deadline {
            return false;
        }
        sleep(policy.poll_interval()).await;
    }
}
