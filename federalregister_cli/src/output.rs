use federalregister_lib::types::{DocumentDetail, DocumentSummary};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

const MAX_TITLE_WIDTH: usize = 80;

#[derive(Tabled)]
struct DocumentRow {
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_document_rows(documents: &[DocumentSummary]) -> Vec<DocumentRow> {
    documents
        .iter()
        .map(|d| DocumentRow {
            number: d.document_number.clone(),
            date: d.publication_date.to_string(),
            title: truncate(&d.title, MAX_TITLE_WIDTH),
        })
        .collect()
}

fn build_detail_rows(detail: &DocumentDetail) -> Vec<FieldRow> {
    let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    vec![
        FieldRow {
            field: "Number",
            value: detail.summary.document_number.clone(),
        },
        FieldRow {
            field: "Title",
            value: detail.summary.title.clone(),
        },
        FieldRow {
            field: "Date",
            value: detail.summary.publication_date.to_string(),
        },
        FieldRow {
            field: "Type",
            value: detail.document_type.clone(),
        },
        FieldRow {
            field: "President",
            value: or_dash(&detail.president),
        },
        FieldRow {
            field: "Agency",
            value: or_dash(&detail.agency),
        },
        FieldRow {
            field: "Raw text",
            value: or_dash(&detail.summary.raw_text_url),
        },
    ]
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

// -- Table output --

pub fn print_documents_table(documents: &[DocumentSummary]) {
    println!("{}", Table::new(build_document_rows(documents)));
}

pub fn print_detail_table(detail: &DocumentDetail) {
    let mut table = Table::new(build_detail_rows(detail));
    table.with(Style::modern());
    println!("{}", table);
    println!();
    println!("{}", detail.text);
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
