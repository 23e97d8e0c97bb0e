use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Text used for [`DocumentDetail::text`] when a record has no raw text URL.
pub const NO_RAW_TEXT: &str = "No raw text available for this document.";

/// Top-level document categories understood by `conditions[type][]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DocumentType {
    Rule,
    ProposedRule,
    Notice,
    PresidentialDocument,
}

impl DocumentType {
    /// The human-readable name the API puts in the `type` field of records.
    pub fn api_name(&self) -> &'static str {
        match self {
            DocumentType::Rule => "Rule",
            DocumentType::ProposedRule => "Proposed Rule",
            DocumentType::Notice => "Notice",
            DocumentType::PresidentialDocument => "Presidential Document",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DocumentType::Rule => "RULE",
                DocumentType::ProposedRule => "PRORULE",
                DocumentType::Notice => "NOTICE",
                DocumentType::PresidentialDocument => "PRESDOCU",
            }
        )
    }
}

/// Accepts both the query tag (`PRESDOCU`) and the record name (`Presidential Document`).
impl FromStr for DocumentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RULE" | "Rule" => Ok(DocumentType::Rule),
            "PRORULE" | "Proposed Rule" => Ok(DocumentType::ProposedRule),
            "NOTICE" | "Notice" => Ok(DocumentType::Notice),
            "PRESDOCU" | "Presidential Document" => Ok(DocumentType::PresidentialDocument),
            _ => Err(()),
        }
    }
}

/// Subtypes of presidential documents, for `conditions[presidential_document_type][]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PresidentialDocumentType {
    Determination,
    ExecutiveOrder,
    Memorandum,
    Notice,
    Proclamation,
    PresidentialOrder,
}

impl std::fmt::Display for PresidentialDocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PresidentialDocumentType::Determination => "determination",
                PresidentialDocumentType::ExecutiveOrder => "executive_order",
                PresidentialDocumentType::Memorandum => "memorandum",
                PresidentialDocumentType::Notice => "notice",
                PresidentialDocumentType::Proclamation => "proclamation",
                PresidentialDocumentType::PresidentialOrder => "presidential_order",
            }
        )
    }
}

impl FromStr for PresidentialDocumentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "determination" => Ok(PresidentialDocumentType::Determination),
            "executive_order" => Ok(PresidentialDocumentType::ExecutiveOrder),
            "memorandum" => Ok(PresidentialDocumentType::Memorandum),
            "notice" => Ok(PresidentialDocumentType::Notice),
            "proclamation" => Ok(PresidentialDocumentType::Proclamation),
            "presidential_order" => Ok(PresidentialDocumentType::PresidentialOrder),
            _ => Err(()),
        }
    }
}

/// One row of a search result, limited to the summary field set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocumentSummary {
    pub document_number: String,

    pub title: String,

    pub publication_date: NaiveDate,

    #[serde(rename = "abstract", default)]
    pub description: Option<String>,

    #[serde(default)]
    pub raw_text_url: Option<String>,
}

/// The `president` field of a record. The API normally sends an object,
/// older payloads carry just the name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PresidentField {
    Person {
        name: String,
        #[serde(default)]
        identifier: Option<String>,
    },
    Name(String),
}

impl PresidentField {
    pub fn name(&self) -> &str {
        match self {
            PresidentField::Person { name, .. } => name,
            PresidentField::Name(name) => name,
        }
    }
}

/// Raw single-document payload as returned by `/documents/{number}.json`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocumentRecord {
    #[serde(rename = "type")]
    pub document_type: String,

    pub document_number: String,

    pub title: String,

    pub publication_date: NaiveDate,

    #[serde(default)]
    pub president: Option<PresidentField>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub agency_names: Vec<String>,

    #[serde(default)]
    pub raw_text_url: Option<String>,
}

impl DocumentRecord {
    pub fn is_presidential(&self) -> bool {
        self.document_type.parse::<DocumentType>() == Ok(DocumentType::PresidentialDocument)
    }

    /// Builds the simplified detail view around an already fetched `text`.
    ///
    /// `president` is kept only for presidential documents. Only the first
    /// agency name survives; the full list stays on the record.
    pub fn into_detail(self, text: String) -> DocumentDetail {
        let president = if self.is_presidential() {
            self.president.as_ref().map(|p| p.name().to_string())
        } else {
            None
        };
        let agency = self.agency_names.into_iter().next();
        DocumentDetail {
            summary: DocumentSummary {
                document_number: self.document_number,
                title: self.title,
                publication_date: self.publication_date,
                description: None,
                raw_text_url: self.raw_text_url,
            },
            document_type: self.document_type,
            president,
            agency,
            text,
        }
    }
}

/// A document's metadata plus its raw text.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocumentDetail {
    #[serde(flatten)]
    pub summary: DocumentSummary,

    pub document_type: String,

    pub president: Option<String>,

    pub agency: Option<String>,

    pub text: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
