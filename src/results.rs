use serde::{Deserialize, Serialize};

/// One product collected from a search-results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Trimmed product title, never empty
    pub title: String,

    /// Raw display price (e.g. "12,99 €"), if the entry showed one
    pub price: Option<String>,
}

impl ItemRecord {
    /// Create a new item record
    pub fn new(title: String, price: Option<String>) -> Self {
        Self { title, price }
    }
}
