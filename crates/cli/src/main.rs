//! cutsim-bench CLI - Query the benchmark chart API from a terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

mod client;
mod error;
mod report;

use client::ApiClient;
use cutsim_bench_core::{ApiRequest, MetricType, RevisionRange, SUMMARY_METRICS};

/// cutsim-bench: inspect the data behind the benchmark charts
#[derive(Parser, Debug)]
#[command(name = "cutsim-bench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the benchmark server
    #[arg(
        long,
        global = true,
        env = "CUTSIM_BENCH_URL",
        default_value = "http://localhost:8000"
    )]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the revision history of one file
    File(FileArgs),
    /// Show the aggregate charts over a revision range
    Summary(SummaryArgs),
}

#[derive(Parser, Debug)]
struct FileArgs {
    /// Chart id of the file, e.g. `plate_roughing.csb`
    id: String,
}

#[derive(Parser, Debug)]
struct SummaryArgs {
    #[arg(long)]
    r1: u32,

    #[arg(long)]
    r2: u32,

    /// Only this metric (default: all five)
    #[arg(short, long)]
    metric: Option<MetricType>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let client = ApiClient::new(&cli.base_url)
        .with_context(|| format!("Invalid base URL: {}", cli.base_url))?;

    match cli.command {
        Commands::File(args) => file_command(&client, args),
        Commands::Summary(args) => summary_command(&client, args),
    }
}

fn file_command(client: &ApiClient, args: FileArgs) -> Result<()> {
    let request = ApiRequest::for_chart_id(&args.id);
    info!("Fetching {}", client.url_for(&request));

    let payload = client
        .fetch(&request)
        .with_context(|| format!("Failed to load chart for {}", args.id))?;

    print!("{}", report::file_report(&args.id, &payload));
    Ok(())
}

fn summary_command(client: &ApiClient, args: SummaryArgs) -> Result<()> {
    let range = RevisionRange::new(args.r1, args.r2);
    let metrics: Vec<MetricType> = match args.metric {
        Some(metric) => vec![metric],
        None => SUMMARY_METRICS.to_vec(),
    };

    info!("Loading {} summary charts for r{}..r{}", metrics.len(), range.low, range.high);

    for metric in metrics {
        let request = ApiRequest::summary(metric, range);
        let payload = client
            .fetch(&request)
            .with_context(|| format!("Failed to load summary chart {}", metric))?;
        println!("{}", report::summary_report(metric, &payload));
    }

    Ok(())
}
