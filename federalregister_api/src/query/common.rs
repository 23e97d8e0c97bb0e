//! Shared query infrastructure: the [`Query`] trait and the [`QueryCommon`] pagination fields.

use url::Url;

use crate::Error;

/// Largest page size the documents endpoint accepts.
pub const MAX_PER_PAGE: u32 = 1000;
/// Page size used when the caller does not pick one.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Trait implemented by query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Flattens this query into ordered key/value pairs. Keys may repeat.
    fn to_query_pairs(&self) -> Vec<(String, String)>;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Checks the query before it is sent.
    fn validate(&self) -> Result<(), Error>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().extend_pairs(self.to_query_pairs());
        url
    }

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_per_page(mut self, per_page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = per_page;
        self
    }
}

/// Pagination fields shared by all queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: u32,
    /// Results per page, between 1 and [`MAX_PER_PAGE`]. Defaults to 20.
    pub per_page: u32,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl QueryCommon {
    /// Appends `per_page` and `page`, in that order.
    pub fn push_pairs(&self, pairs: &mut Vec<(String, String)>) {
        pairs.push(("per_page".to_string(), self.per_page.to_string()));
        pairs.push(("page".to_string(), self.page.to_string()));
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(Error::Validation(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.per_page
            )));
        }
        if self.page == 0 {
            return Err(Error::Validation("page must be at least 1".to_string()));
        }
        Ok(())
    }
}
