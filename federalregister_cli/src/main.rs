mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use federalregister_lib::{PacedClient, Settings};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "federalregister")]
#[command(about = "Search Federal Register documents and fetch their full text")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search documents
    Search(commands::search::SearchArgs),
    /// Show one document with its raw text
    Document(commands::document::DocumentArgs),
    /// Write every executive order of a president in a date range to one text file
    ExecutiveOrders(commands::executive_orders::ExecutiveOrdersArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("federalregister=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let settings = Settings::from_env()?;
    let client = PacedClient::new(settings)?;

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
        Commands::Document(args) => commands::document::run(args, &client, &format).await?,
        Commands::ExecutiveOrders(args) => commands::executive_orders::run(args, &client).await?,
    }

    Ok(())
}
