//! Markers for the Amazon search-results layout.

/// Search input on the landing page
pub const SEARCH_BOX: &str = "#twotabsearchtextbox";

/// One product card in the results listing
pub const RESULT_ENTRY: &str = "div[data-component-type='s-search-result']";

/// Title text inside a product card
pub const ENTRY_TITLE: &str = "h2 span";

/// Screen-reader price inside a product card
pub const ENTRY_PRICE: &str = "span.a-price > span.a-offscreen";

/// Any descendant whose own text mentions "sponsored", case-insensitively
pub const SPONSORED_MARKER: &str =
    ".//*[text()[contains(translate(., 'SPONSORED', 'sponsored'), 'sponsored')]]";

/// Link to the next results page
pub const NEXT_PAGE: &str = "a.s-pagination-next";

/// Class carried by the next-page control on the last page
pub const NEXT_PAGE_DISABLED_CLASS: &str = "s-pagination-disabled";

/// Whether a class attribute marks the next-page control as disabled
pub fn is_disabled_class(class_attr: &str) -> bool {
    class_attr
        .split_whitespace()
        .any(|class| class == NEXT_PAGE_DISABLED_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_disabled_class() {
        assert!(is_disabled_class(
            "s-pagination-item s-pagination-next s-pagination-disabled"
        ));
        assert!(!is_disabled_class("s-pagination-item s-pagination-next"));
        assert!(!is_disabled_class(""));
    }
}
