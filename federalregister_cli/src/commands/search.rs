use anyhow::Result;
use clap::Args;
use federalregister_lib::validation;
use federalregister_lib::{FederalRegisterError, PacedClient, Query, SearchRequest};

use crate::output::{print_documents_table, print_json, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Document type: rule, proposed-rule, notice, presidential (repeatable)
    #[arg(long = "type")]
    pub types: Vec<String>,

    /// Presidential document subtype (e.g. executive-order, proclamation, memorandum)
    #[arg(long)]
    pub presidential_type: Option<String>,

    /// President slug (e.g. donald-trump, joe-biden)
    #[arg(long)]
    pub president: Option<String>,

    /// Agency slug (repeatable, e.g. environmental-protection-agency)
    #[arg(long = "agency")]
    pub agencies: Vec<String>,

    /// Full-text search term
    #[arg(long)]
    pub term: Option<String>,

    /// Earliest publication date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest publication date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page (max 1000)
    #[arg(long, default_value = "20")]
    pub per_page: u32,
}

/// Turns validated command-line filters into a search request.
pub fn build_request(args: &SearchArgs) -> Result<SearchRequest, FederalRegisterError> {
    let mut request = SearchRequest::default()
        .with_page(args.page)
        .with_per_page(validation::validate_per_page(args.per_page)?);

    for t in &args.types {
        request = request.with_document_type(validation::parse_document_type(t)?);
    }
    if let Some(ref subtype) = args.presidential_type {
        request = request.with_presidential_type(validation::parse_presidential_type(subtype)?);
    }
    if let Some(ref president) = args.president {
        request = request.with_president(&validation::validate_slug(president)?);
    }
    for agency in &args.agencies {
        request = request.with_agency(&validation::validate_slug(agency)?);
    }
    if let Some(ref term) = args.term {
        request = request.with_search_term(&validation::validate_search(term)?);
    }

    let from = args
        .from
        .as_deref()
        .map(validation::validate_date)
        .transpose()?;
    let to = args
        .to
        .as_deref()
        .map(validation::validate_date)
        .transpose()?;
    validation::validate_date_range(from, to)?;
    if let Some(from) = from {
        request = request.with_from_date(from);
    }
    if let Some(to) = to {
        request = request.with_to_date(to);
    }
    Ok(request)
}

pub async fn run(args: &SearchArgs, client: &PacedClient, format: &OutputFormat) -> Result<()> {
    let request = build_request(args)?;
    let resp = client.search_documents(&request).await?;

    eprintln!(
        "Page {}/{} ({} total documents)",
        request.common.page,
        resp.total_pages.unwrap_or(0),
        resp.total_count
    );

    match format {
        OutputFormat::Table => print_documents_table(&resp.items),
        OutputFormat::Json => print_json(&resp.items),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use federalregister_lib::types::{DocumentType, PresidentialDocumentType};

    use super::*;

    fn args() -> SearchArgs {
        SearchArgs {
            types: vec![],
            presidential_type: None,
            president: None,
            agencies: vec![],
            term: None,
            from: None,
            to: None,
            page: 1,
            per_page: 20,
        }
    }

    #[test]
    fn executive_order_filters() {
        let mut a = args();
        a.types = vec!["presidential".to_string()];
        a.presidential_type = Some("executive-order".to_string());
        a.president = Some("Donald-Trump".to_string());
        a.from = Some("2025-01-20".to_string());
        let request = build_request(&a).unwrap();
        assert_eq!(
            request.document_types,
            vec![DocumentType::PresidentialDocument]
        );
        assert_eq!(
            request.presidential_type,
            Some(PresidentialDocumentType::ExecutiveOrder)
        );
        assert_eq!(request.president.as_deref(), Some("donald-trump"));
        assert!(request.date_range.from.is_some());
        assert!(request.date_range.to.is_none());
    }

    #[test]
    fn repeated_agencies_and_types() {
        let mut a = args();
        a.types = vec!["rule".to_string(), "notice".to_string()];
        a.agencies = vec!["labor-department".to_string(), "commerce-department".to_string()];
        let request = build_request(&a).unwrap();
        assert_eq!(
            request.document_types,
            vec![DocumentType::Rule, DocumentType::Notice]
        );
        assert_eq!(
            request.agencies,
            vec!["labor-department".to_string(), "commerce-department".to_string()]
        );
    }

    #[test]
    fn invalid_inputs_rejected() {
        let mut a = args();
        a.per_page = 1001;
        assert!(build_request(&a).is_err());

        let mut a = args();
        a.from = Some("2025-03-01".to_string());
        a.to = Some("2025-01-01".to_string());
        assert!(build_request(&a).is_err());

        let mut a = args();
        a.types = vec!["memo".to_string()];
        assert!(build_request(&a).is_err());

        let mut a = args();
        a.president = Some("donald trump".to_string());
        assert!(build_request(&a).is_err());
    }
}
