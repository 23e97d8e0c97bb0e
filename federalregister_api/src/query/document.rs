use chrono::NaiveDate;

use crate::{
    types::{DocumentType, PresidentialDocumentType},
    Error,
};

use super::common::{Query, QueryCommon};

/// Fields requested for every search result row.
pub const SUMMARY_FIELDS: &[&str] = &[
    "document_number",
    "title",
    "abstract",
    "raw_text_url",
    "publication_date",
];

/// Fields requested when fetching a single document.
pub const DETAIL_FIELDS: &[&str] = &[
    "type",
    "document_number",
    "title",
    "publication_date",
    "president",
    "agency_names",
    "raw_text_url",
];

/// Inclusive publication-date bounds. Either side may be open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Filters for the documents search endpoint.
///
/// Every filter is either set or absent: `None` and an empty list both mean
/// no parameter is sent.
#[derive(Clone, Debug, Default)]
pub struct SearchRequest {
    pub common: QueryCommon,
    pub document_types: Vec<DocumentType>,
    pub presidential_type: Option<PresidentialDocumentType>,
    /// President slug, e.g. `donald-trump`.
    pub president: Option<String>,
    /// Agency slugs, sent in order.
    pub agencies: Vec<String>,
    pub date_range: DateRange,
    pub search_term: Option<String>,
}

impl Query for SearchRequest {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        self.common.push_pairs(&mut pairs);
        for field in SUMMARY_FIELDS {
            pairs.push(("fields[]".to_string(), field.to_string()));
        }
        for document_type in self.document_types.iter() {
            pairs.push(("conditions[type][]".to_string(), document_type.to_string()));
        }
        if let Some(presidential_type) = &self.presidential_type {
            pairs.push((
                "conditions[presidential_document_type][]".to_string(),
                presidential_type.to_string(),
            ));
        }
        if let Some(president) = &self.president {
            pairs.push(("conditions[president][]".to_string(), president.clone()));
        }
        for agency in self.agencies.iter() {
            pairs.push(("conditions[agencies][]".to_string(), agency.clone()));
        }
        if let Some(term) = &self.search_term {
            pairs.push(("conditions[term]".to_string(), term.clone()));
        }
        if let Some(from) = self.date_range.from {
            pairs.push((
                "conditions[publication_date][gte]".to_string(),
                from.format("%Y-%m-%d").to_string(),
            ));
        }
        if let Some(to) = self.date_range.to {
            pairs.push((
                "conditions[publication_date][lte]".to_string(),
                to.format("%Y-%m-%d").to_string(),
            ));
        }
        pairs
    }

    fn validate(&self) -> Result<(), Error> {
        self.common.validate()?;
        if let (Some(from), Some(to)) = (self.date_range.from, self.date_range.to) {
            if from > to {
                return Err(Error::Validation(format!(
                    "date range start {} is after end {}",
                    from, to
                )));
            }
        }
        if let Some(term) = &self.search_term {
            non_blank("search term", term)?;
        }
        if let Some(president) = &self.president {
            non_blank("president", president)?;
        }
        for agency in self.agencies.iter() {
            non_blank("agency", agency)?;
        }
        Ok(())
    }
}

fn non_blank(what: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} must not be empty", what)));
    }
    Ok(())
}

impl SearchRequest {
    /// Presidential executive orders.
    pub fn executive_orders() -> Self {
        Self::default()
            .with_document_type(DocumentType::PresidentialDocument)
            .with_presidential_type(PresidentialDocumentType::ExecutiveOrder)
    }

    /// Final rules.
    pub fn final_rules() -> Self {
        Self::default().with_document_type(DocumentType::Rule)
    }

    pub fn with_document_type(mut self, document_type: DocumentType) -> Self {
        self.document_types.push(document_type);
        self
    }
    pub fn with_document_types(mut self, document_types: &[DocumentType]) -> Self {
        self.document_types.extend_from_slice(document_types);
        self
    }

    pub fn with_presidential_type(mut self, presidential_type: PresidentialDocumentType) -> Self {
        self.presidential_type = Some(presidential_type);
        self
    }

    pub fn with_president(mut self, president: &str) -> Self {
        self.president = Some(president.to_string());
        self
    }

    pub fn with_agency(mut self, agency: &str) -> Self {
        self.agencies.push(agency.to_string());
        self
    }
    pub fn with_agencies(mut self, agencies: &[String]) -> Self {
        self.agencies.extend_from_slice(agencies);
        self
    }

    pub fn with_search_term(mut self, term: &str) -> Self {
        self.search_term = Some(term.to_string());
        self
    }

    pub fn with_from_date(mut self, from: NaiveDate) -> Self {
        self.date_range.from = Some(from);
        self
    }
    pub fn with_to_date(mut self, to: NaiveDate) -> Self {
        self.date_range.to = Some(to);
        self
    }
    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }
}
