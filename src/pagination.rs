use crate::browser::{PageTurn, SearchPage};
use crate::config::{LazyLoadPolicy, MAX_ITEMS_PER_PAGE};
use crate::error::ScrapeError;
use crate::extractor;
use crate::results::ItemRecord;
use std::time::Duration;

/// Limits for walking through result pages
#[derive(Debug, Clone, Copy)]
pub struct PaginationLimits {
    /// Loop stops once the page counter reaches this value
    pub max_pages: usize,
    /// How long a page reached through the next-page control may take to load
    pub page_load_timeout: Duration,
}

/// Collects `items_requested` products, moving through result pages as needed.
///
/// Full pages of 16 are read until the remaining need fits on one page; that
/// last page is read for exactly the remainder and the loop ends even if more
/// pages exist. A missing or disabled next-page control ends the loop with
/// whatever was collected. Only a failed page load after clicking next is fatal.
pub async fn paginate<P: SearchPage>(
    page: &P,
    items_requested: i64,
    limits: PaginationLimits,
    policy: &LazyLoadPolicy,
) -> Result<Vec<ItemRecord>, ScrapeError> {
    let mut collected: Vec<ItemRecord> = Vec::new();
    let mut page_num = 1;

    while page_num < limits.max_pages {
        let remaining = items_requested - collected.len() as i64;
        if remaining <= 0 {
            break;
        }

        if remaining <= MAX_ITEMS_PER_PAGE as i64 {
            ::log::debug!("Page {}: collecting the last {} item(s)", page_num, remaining);
            let items = extractor::extract(page, remaining as usize, policy).await;
            collected.extend(items);
            break;
        }

        ::log::debug!("Page {}: collecting a full page", page_num);
        let items = extractor::extract(page, MAX_ITEMS_PER_PAGE, policy).await;
        collected.extend(items);

        match page.next_page(limits.page_load_timeout).await? {
            PageTurn::NoNextControl => {
                ::log::error!("No next page button");
                break;
            }
            PageTurn::NextDisabled => {
                ::log::error!("Next page button is disabled");
                break;
            }
            PageTurn::Advanced => {
                ::log::info!("Switching to page {}...", page_num + 1);
            }
        }

        page_num += 1;
    }

    Ok(collected)
}
