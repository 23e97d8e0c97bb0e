//! Client for the Federal Register document search API.
//!
//! [`SearchRequest`] encodes search filters into the API's bracketed
//! `conditions[...]` query convention; [`Client`] sends searches and fetches
//! single documents together with their raw text.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{
    DateRange, Query, QueryCommon, SearchRequest, DEFAULT_PER_PAGE, DETAIL_FIELDS, MAX_PER_PAGE,
    SUMMARY_FIELDS,
};
