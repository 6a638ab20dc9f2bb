//! Diario-Fortaleza main entry point
//!
//! Command-line interface for the Fortaleza official gazette crawler.

use anyhow::Context;
use clap::Parser;
use diario_fortaleza::config::{load_config, Config};
use diario_fortaleza::crawler::crawl;
use diario_fortaleza::output::print_stats;
use diario_fortaleza::url::seed_addresses;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Crawler for the Fortaleza (CE) official gazette portal
///
/// Enumerates one paginated listing chain per calendar year, extracts one
/// record per gazette publication, and writes records as JSON lines for
/// downstream download and archival.
#[derive(Parser, Debug)]
#[command(name = "diario-fortaleza")]
#[command(version)]
#[command(about = "Fortaleza official gazette crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the seed listing URLs and exit without crawling
    #[arg(long)]
    dry_run: bool,

    /// Override the output path from the config
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).context("failed to load configuration")?
        }
        None => {
            tracing::info!("No config file given, using built-in defaults");
            Config::default()
        }
    };

    if let Some(output) = &cli.output {
        config.output.gazettes_path = output.display().to_string();
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    tracing::info!(
        "Crawling gazettes from {} onward into {}",
        config.crawler.start_year,
        config.output.gazettes_path
    );

    let stats = crawl(config).await.context("crawl failed")?;

    print_stats(&stats);

    if stats.chains_failed > 0 {
        tracing::warn!(
            "{} of {} year chains ended on a fetch error; their later pages were not visited",
            stats.chains_failed,
            stats.total_chains()
        );
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("diario_fortaleza=info,warn"),
            1 => EnvFilter::new("diario_fortaleza=debug,info"),
            2 => EnvFilter::new("diario_fortaleza=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --dry-run: prints the seed URLs that would start each chain
fn handle_dry_run(config: &Config) {
    let seeds = seed_addresses(config.crawler.start_year);

    println!("=== Diario-Fortaleza Dry Run ===\n");
    println!("Start year: {}", config.crawler.start_year);
    println!("Output: {}", config.output.gazettes_path);
    println!("\nSeed listing pages ({}):", seeds.len());
    for seed in &seeds {
        println!("  {}", seed);
    }

    if seeds.is_empty() {
        println!("  (none: the current year is the start year)");
    }
}
