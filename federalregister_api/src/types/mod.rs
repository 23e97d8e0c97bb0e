mod meta;
pub use self::meta::SearchResult;

mod document;
pub use self::document::{
    DocumentDetail, DocumentRecord, DocumentSummary, DocumentType, PresidentField,
    PresidentialDocumentType, NO_RAW_TEXT,
};
