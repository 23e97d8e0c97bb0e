use chrono::NaiveDate;
use federalregister_api::types::{DocumentType, PresidentialDocumentType};
use federalregister_api::{DateRange, Query, SearchRequest, SUMMARY_FIELDS};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn values<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

fn has_key_containing(pairs: &[(String, String)], needle: &str) -> bool {
    pairs.iter().any(|(k, _)| k.contains(needle))
}

#[test]
fn defaults_emit_pagination_and_fields_only() {
    let pairs = SearchRequest::default().to_query_pairs();
    assert_eq!(values(&pairs, "per_page"), vec!["20"]);
    assert_eq!(values(&pairs, "page"), vec!["1"]);
    assert_eq!(values(&pairs, "fields[]"), SUMMARY_FIELDS.to_vec());
    assert!(!has_key_containing(&pairs, "conditions"));
}

#[test]
fn agencies_repeat_in_order() {
    let pairs = SearchRequest::default()
        .with_agencies(&["a".to_string(), "b".to_string()])
        .to_query_pairs();
    assert_eq!(values(&pairs, "conditions[agencies][]"), vec!["a", "b"]);
}

#[test]
fn both_date_bounds() {
    let pairs = SearchRequest::default()
        .with_date_range(DateRange::new(
            Some(date("2024-01-01")),
            Some(date("2024-12-31")),
        ))
        .to_query_pairs();
    assert_eq!(
        values(&pairs, "conditions[publication_date][gte]"),
        vec!["2024-01-01"]
    );
    assert_eq!(
        values(&pairs, "conditions[publication_date][lte]"),
        vec!["2024-12-31"]
    );
}

#[test]
fn no_date_bounds_no_publication_date_key() {
    let pairs = SearchRequest::final_rules()
        .with_search_term("air quality")
        .to_query_pairs();
    assert!(!has_key_containing(&pairs, "publication_date]"));
    assert_eq!(values(&pairs, "conditions[term]"), vec!["air quality"]);
}

#[test]
fn per_page_over_limit_fails_validation() {
    let request = SearchRequest::default().with_per_page(1001);
    assert!(request.validate().is_err());
    assert!(SearchRequest::default().with_per_page(1000).validate().is_ok());
}

#[test]
fn two_types_two_pairs_in_order() {
    let pairs = SearchRequest::default()
        .with_document_type(DocumentType::Rule)
        .with_document_type(DocumentType::PresidentialDocument)
        .to_query_pairs();
    assert_eq!(values(&pairs, "conditions[type][]"), vec!["RULE", "PRESDOCU"]);
}

#[test]
fn trump_executive_orders_scenario() {
    let request = SearchRequest::default()
        .with_document_type(DocumentType::PresidentialDocument)
        .with_presidential_type(PresidentialDocumentType::ExecutiveOrder)
        .with_president("donald-trump")
        .with_from_date(date("2025-01-20"));
    let pairs = request.to_query_pairs();
    assert_eq!(values(&pairs, "conditions[type][]"), vec!["PRESDOCU"]);
    assert_eq!(
        values(&pairs, "conditions[presidential_document_type][]"),
        vec!["executive_order"]
    );
    assert_eq!(values(&pairs, "conditions[president][]"), vec!["donald-trump"]);
    assert_eq!(
        values(&pairs, "conditions[publication_date][gte]"),
        vec!["2025-01-20"]
    );
    assert!(values(&pairs, "conditions[publication_date][lte]").is_empty());
}

#[test]
fn executive_orders_preset_matches_manual_build() {
    let preset = SearchRequest::executive_orders().to_query_pairs();
    let manual = SearchRequest::default()
        .with_document_type(DocumentType::PresidentialDocument)
        .with_presidential_type(PresidentialDocumentType::ExecutiveOrder)
        .to_query_pairs();
    assert_eq!(preset, manual);
}

#[test]
fn unset_filters_emit_nothing() {
    let pairs = SearchRequest::default()
        .with_agencies(&[])
        .with_date_range(DateRange::default())
        .to_query_pairs();
    assert_eq!(pairs.len(), 2 + SUMMARY_FIELDS.len());
    assert!(pairs.iter().all(|(_, v)| !v.is_empty()));
}

#[test]
fn url_escapes_brackets_and_spaces() {
    let url = SearchRequest::default()
        .with_search_term("clean water")
        .with_page(4)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=4"));
    assert!(query.contains("conditions%5Bterm%5D=clean+water"));

    let decoded: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(values(&decoded, "conditions[term]"), vec!["clean water"]);
}
