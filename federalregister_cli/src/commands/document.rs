use anyhow::Result;
use clap::Args;
use federalregister_lib::validation;
use federalregister_lib::PacedClient;

use crate::output::{print_detail_table, print_json, OutputFormat};

#[derive(Args)]
pub struct DocumentArgs {
    /// Document number (e.g. 2025-01953)
    pub number: String,
}

pub async fn run(args: &DocumentArgs, client: &PacedClient, format: &OutputFormat) -> Result<()> {
    let number = validation::validate_document_number(&args.number)?;
    let detail = client.fetch(&number).await?;

    match format {
        OutputFormat::Table => print_detail_table(&detail),
        OutputFormat::Json => print_json(&detail),
    }

    Ok(())
}
