use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use federalregister_lib::aggregate::{collect_executive_orders, render_report, write_report};
use federalregister_lib::validation;
use federalregister_lib::PacedClient;

#[derive(Args)]
pub struct ExecutiveOrdersArgs {
    /// President slug (e.g. donald-trump)
    #[arg(long)]
    pub president: String,

    /// Earliest publication date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: String,

    /// Latest publication date, inclusive (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub to: Option<String>,

    /// File the aggregated report is written to
    #[arg(long, default_value = "executive_orders.txt")]
    pub out: PathBuf,
}

pub async fn run(args: &ExecutiveOrdersArgs, client: &PacedClient) -> Result<()> {
    let president = validation::validate_slug(&args.president)?;
    let from = validation::validate_date(&args.from)?;
    let to = match args.to {
        Some(ref to) => validation::validate_date(to)?,
        None => Local::now().date_naive(),
    };

    let documents = collect_executive_orders(client, &president, from, to).await?;
    eprintln!(
        "Found {} executive orders by {} between {} and {}",
        documents.len(),
        president,
        from,
        to
    );

    let signer = documents
        .iter()
        .find_map(|d| d.president.clone())
        .unwrap_or_else(|| president.clone());
    let heading = format!("Executive Orders signed by {}", signer);
    let report = render_report(&heading, from, to, &documents);
    write_report(&args.out, &report)?;
    eprintln!("Aggregated executive orders saved to {}", args.out.display());

    Ok(())
}
