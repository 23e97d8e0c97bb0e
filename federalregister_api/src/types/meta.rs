use serde::{Deserialize, Serialize};

use super::DocumentSummary;

/// The `count`/`results` envelope returned by the documents search endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchResult {
    #[serde(rename = "count")]
    pub total_count: u64,

    #[serde(default)]
    pub total_pages: Option<u64>,

    /// Omitted by the API when nothing matched.
    #[serde(rename = "results", default)]
    pub items: Vec<DocumentSummary>,

    #[serde(default)]
    pub next_page_url: Option<String>,
}

impl SearchResult {
    /// True when `page` is the last page of this result set.
    pub fn is_last_page(&self, page: u32) -> bool {
        match self.total_pages {
            Some(total) => u64::from(page) >= total,
            None => self.next_page_url.is_none(),
        }
    }
}
