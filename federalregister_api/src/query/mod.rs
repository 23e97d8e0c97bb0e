mod common;
pub use self::common::{Query, QueryCommon, DEFAULT_PER_PAGE, MAX_PER_PAGE};

mod document;
pub use self::document::{DateRange, SearchRequest, DETAIL_FIELDS, SUMMARY_FIELDS};
