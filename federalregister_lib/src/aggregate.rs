//! Multi-page collection of search results and the plain-text report built from them.

use std::path::Path;

use chrono::NaiveDate;
use federalregister_api::types::{DocumentDetail, DocumentSummary};
use federalregister_api::{Query, SearchRequest};

use crate::client::PacedClient;
use crate::error::FederalRegisterError;

/// Line written between documents in a report.
pub const SEPARATOR: &str = "================================================================================";

/// Page size used when walking every page of a search.
pub const AGGREGATE_PER_PAGE: u32 = 100;

/// Runs `request` starting at its own page and follows pagination to the end.
pub async fn collect_summaries(
    client: &PacedClient,
    request: &SearchRequest,
) -> Result<Vec<DocumentSummary>, FederalRegisterError> {
    let mut page = request.common.page;
    let mut summaries = Vec::new();
    loop {
        let result = client
            .search_documents(&request.clone().with_page(page))
            .await?;
        tracing::info!(
            "Page {}: {} documents ({} total)",
            page,
            result.items.len(),
            result.total_count
        );
        let last = result.items.is_empty() || result.is_last_page(page);
        summaries.extend(result.items);
        if last || summaries.len() as u64 >= result.total_count {
            break;
        }
        page += 1;
    }
    Ok(summaries)
}

/// Fetches the detail and raw text of every summary, in order.
pub async fn collect_documents(
    client: &PacedClient,
    summaries: &[DocumentSummary],
) -> Result<Vec<DocumentDetail>, FederalRegisterError> {
    let mut documents = Vec::with_capacity(summaries.len());
    for (idx, summary) in summaries.iter().enumerate() {
        tracing::info!(
            "{}/{}: retrieving document {}",
            idx + 1,
            summaries.len(),
            summary.document_number
        );
        documents.push(client.fetch(&summary.document_number).await?);
    }
    Ok(documents)
}

/// Collects every executive order signed by `president` published between
/// `from` and `to` (inclusive), with full text.
pub async fn collect_executive_orders(
    client: &PacedClient,
    president: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DocumentDetail>, FederalRegisterError> {
    crate::validation::validate_date_range(Some(from), Some(to))?;
    let request = SearchRequest::executive_orders()
        .with_president(president)
        .with_from_date(from)
        .with_to_date(to)
        .with_per_page(AGGREGATE_PER_PAGE);
    let summaries = collect_summaries(client, &request).await?;
    collect_documents(client, &summaries).await
}

/// Renders documents as one text report: a heading, the date range, then one
/// block per document introduced by [`SEPARATOR`].
pub fn render_report(
    heading: &str,
    from: NaiveDate,
    to: NaiveDate,
    documents: &[DocumentDetail],
) -> String {
    let mut lines = vec![heading.to_string(), format!("From {} to {}\n", from, to)];
    for doc in documents {
        lines.push(SEPARATOR.to_string());
        lines.push(format!("Document Number: {}", doc.summary.document_number));
        lines.push(format!("Title: {}", doc.summary.title));
        lines.push(format!(
            "Publication Date: {}\n",
            doc.summary.publication_date
        ));
        lines.push("Text:\n".to_string());
        lines.push(doc.text.clone());
        lines.push("\n".to_string());
    }
    lines.join("\n")
}

pub fn write_report(path: &Path, report: &str) -> Result<(), FederalRegisterError> {
    std::fs::write(path, report)?;
    tracing::info!("Wrote {} bytes to {}", report.len(), path.display());
    Ok(())
}
