use chrono::NaiveDate;
use federalregister_api::types::{DocumentType, PresidentialDocumentType};
use federalregister_api::MAX_PER_PAGE;

use crate::error::FederalRegisterError;

pub const MAX_SEARCH_LENGTH: usize = 200;
pub const MAX_SLUG_LENGTH: usize = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, FederalRegisterError> {
    if input.len() > max_len {
        return Err(FederalRegisterError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(FederalRegisterError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a full-text search term: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, FederalRegisterError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a president or agency slug such as `donald-trump` or
/// `environmental-protection-agency`. Input is lowercased first.
pub fn validate_slug(input: &str) -> Result<String, FederalRegisterError> {
    let slug = input.trim().to_lowercase();
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
        return Err(FederalRegisterError::InvalidInput(format!(
            "slug must be between 1 and {} characters",
            MAX_SLUG_LENGTH
        )));
    }
    let well_formed = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-');
    if !well_formed {
        return Err(FederalRegisterError::InvalidInput(format!(
            "'{}' is not a valid slug (lowercase letters, digits and inner hyphens only)",
            input
        )));
    }
    Ok(slug)
}

/// Validate a `YYYY-MM-DD` date.
pub fn validate_date(input: &str) -> Result<NaiveDate, FederalRegisterError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FederalRegisterError::InvalidInput(format!(
            "invalid date '{}', expected YYYY-MM-DD",
            input
        ))
    })
}

/// Validate a date range given as two optional bounds.
pub fn validate_date_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<(), FederalRegisterError> {
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(FederalRegisterError::InvalidInput(format!(
                "start date {} is after end date {}",
                from, to
            )));
        }
    }
    Ok(())
}

/// Validate a page size against the API maximum.
pub fn validate_per_page(per_page: u32) -> Result<u32, FederalRegisterError> {
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(FederalRegisterError::InvalidInput(format!(
            "per-page must be between 1 and {}",
            MAX_PER_PAGE
        )));
    }
    Ok(per_page)
}

/// Validate a document number such as `2025-01953`.
pub fn validate_document_number(input: &str) -> Result<String, FederalRegisterError> {
    let number = input.trim();
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(FederalRegisterError::InvalidInput(format!(
            "invalid document number '{}'",
            input
        )));
    }
    Ok(number.to_string())
}

/// Parse a document type: accepts API tags (`PRESDOCU`) and friendly names.
pub fn parse_document_type(input: &str) -> Result<DocumentType, FederalRegisterError> {
    match input.trim().to_lowercase().as_str() {
        "rule" | "final-rule" => Ok(DocumentType::Rule),
        "prorule" | "proposed-rule" => Ok(DocumentType::ProposedRule),
        "notice" => Ok(DocumentType::Notice),
        "presdocu" | "presidential" | "presidential-document" => {
            Ok(DocumentType::PresidentialDocument)
        }
        _ => Err(FederalRegisterError::InvalidInput(format!(
            "unknown document type '{}'. Valid types: rule, proposed-rule, notice, presidential",
            input
        ))),
    }
}

/// Parse a presidential document subtype; hyphens and underscores are interchangeable.
pub fn parse_presidential_type(
    input: &str,
) -> Result<PresidentialDocumentType, FederalRegisterError> {
    input
        .trim()
        .to_lowercase()
        .replace('-', "_")
        .parse::<PresidentialDocumentType>()
        .map_err(|_| {
            FederalRegisterError::InvalidInput(format!(
                "unknown presidential document type '{}'. Valid types: determination, executive-order, memorandum, notice, proclamation, presidential-order",
                input
            ))
        })
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
