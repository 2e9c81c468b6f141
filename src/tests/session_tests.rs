use super::fake_page::{Call, EntrySpec, FakePage, NextControl, ResultsPageSpec};
use super::instant_policy;
use crate::browser::selectors;
use crate::config::RunConfig;
use crate::error::ScrapeError;
use crate::session::run_on;

fn test_config(items_requested: i64) -> RunConfig {
    RunConfig {
        website: "https://shop.example".to_string(),
        query: "harry potter buch".to_string(),
        items_requested,
        lazy_load: instant_policy(),
        ..RunConfig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_flow_order() {
        let page = FakePage::new(vec![ResultsPageSpec::organic(
            "Buch",
            16,
            NextControl::Missing,
        )]);
        let log = page.call_log();

        let items = run_on(page, &test_config(3)).await.unwrap();
        assert_eq!(items.len(), 3);

        let calls = log.borrow().clone();
        assert_eq!(calls[0], Call::Goto("https://shop.example".to_string()));
        assert_eq!(calls[1], Call::WaitFor(selectors::SEARCH_BOX.to_string()));
        assert_eq!(
            calls[2],
            Call::FillAndSubmit(
                selectors::SEARCH_BOX.to_string(),
                "harry potter buch".to_string()
            )
        );
        assert_eq!(calls[3], Call::WaitFor(selectors::RESULT_ENTRY.to_string()));
        assert_eq!(calls.last(), Some(&Call::Close));
        assert_eq!(calls.iter().filter(|c| **c == Call::Close).count(), 1);
    }

    #[tokio::test]
    async fn test_five_organic_items_from_mixed_page() {
        let page = FakePage::single(vec![
            EntrySpec::organic("Band 1", "10,00 €"),
            EntrySpec::sponsored("Anzeige 1"),
            EntrySpec::sponsored("Anzeige 2"),
            EntrySpec::organic("Band 2", "11,00 €"),
            EntrySpec::organic("Band 3", "12,00 €"),
            EntrySpec::sponsored("Anzeige 3"),
            EntrySpec::organic("Band 4", "13,00 €"),
            EntrySpec::organic("Band 5", "14,00 €"),
            EntrySpec::organic("Band 6", "15,00 €"),
            EntrySpec::organic("Band 7", "16,00 €"),
        ]);

        let items = run_on(page, &test_config(5)).await.unwrap();
        let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, vec!["Band 1", "Band 2", "Band 3", "Band 4", "Band 5"]);
        assert_eq!(items[4].price.as_deref(), Some("14,00 €"));
    }

    #[tokio::test]
    async fn test_missing_search_box_is_fatal() {
        let page = FakePage::single(vec![]).with_missing_selector(selectors::SEARCH_BOX);
        let log = page.call_log();

        let result = run_on(page, &test_config(5)).await;
        assert!(matches!(result, Err(ScrapeError::Timeout { .. })));

        let calls = log.borrow().clone();
        assert!(
            !calls
                .iter()
                .any(|call| matches!(call, Call::FillAndSubmit(_, _)))
        );
        // The session is still released
        assert_eq!(calls.last(), Some(&Call::Close));
    }

    #[tokio::test]
    async fn test_missing_results_is_fatal() {
        let page = FakePage::single(vec![EntrySpec::organic("Band 1", "1 €")])
            .with_missing_selector(selectors::RESULT_ENTRY);
        let log = page.call_log();

        let result = run_on(page, &test_config(5)).await;
        match result {
            Err(ScrapeError::Timeout { what, .. }) => assert_eq!(what, selectors::RESULT_ENTRY),
            other => panic!("expected a timeout, got {:?}", other),
        }
        assert!(!log.borrow().iter().any(|call| matches!(call, Call::Entries(_))));
    }
}
