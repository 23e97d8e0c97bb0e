use federalregister_lib::types::{DocumentRecord, SearchResult, NO_RAW_TEXT};

use super::*;

fn load_search_fixture() -> Vec<DocumentSummary> {
    let json_str =
        include_str!("../../federalregister_api/tests/fixtures/search_executive_orders.json");
    let resp: SearchResult = serde_json::from_str(json_str).unwrap();
    resp.items
}

fn load_rule_detail() -> DocumentDetail {
    let json_str = include_str!("../../federalregister_api/tests/fixtures/document_rule.json");
    let record: DocumentRecord = serde_json::from_str(json_str).unwrap();
    record.into_detail(NO_RAW_TEXT.to_string())
}

#[test]
fn test_output_format_parse() {
    assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
    assert_eq!(OutputFormat::parse("anything"), OutputFormat::Table);
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("abcdefghij", 8), "abcde...");
}

#[test]
fn test_build_document_rows_mapping() {
    let rows = build_document_rows(&load_search_fixture());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].number, "2025-01953");
    assert_eq!(rows[0].date, "2025-01-29");
    assert_eq!(rows[1].title, "Unleashing American Energy");
}

#[test]
fn test_build_document_rows_empty() {
    assert!(build_document_rows(&[]).is_empty());
}

#[test]
fn test_build_detail_rows_dashes_for_absent_fields() {
    let rows = build_detail_rows(&load_rule_detail());
    let get = |name: &str| {
        rows.iter()
            .find(|r| r.field == name)
            .map(|r| r.value.clone())
            .unwrap()
    };
    assert_eq!(get("Type"), "Rule");
    assert_eq!(get("President"), "-");
    assert_eq!(get("Agency"), "Environmental Protection Agency");
    assert_eq!(get("Raw text"), "-");
}

#[test]
fn test_table_has_headers() {
    let table = Table::new(build_document_rows(&load_search_fixture())).to_string();
    assert!(table.contains("Number"));
    assert!(table.contains("Date"));
    assert!(table.contains("Title"));
}

#[test]
fn test_json_detail_serializable() {
    let value = serde_json::to_value(load_rule_detail()).unwrap();
    assert_eq!(value["document_number"], "2024-05123");
    assert_eq!(value["text"], NO_RAW_TEXT);
    assert!(value["president"].is_null());
}
