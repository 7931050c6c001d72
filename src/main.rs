//! Sitegrade main entry point
//!
//! Command-line interface for the sitemap-driven SEO report generator.

use anyhow::Context;
use clap::Parser;
use sitegrade::config::{load_config, Config};
use sitegrade::run_audit;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitegrade: audit every page of a sitemap for on-page SEO signals
///
/// Fetches the given sitemap, audits each listed page (titles, meta tags,
/// headings, link counts, broken external links, load time), and writes a
/// CSV report.
#[derive(Parser, Debug)]
#[command(name = "sitegrade")]
#[command(version)]
#[command(about = "Sitemap-driven SEO report generator", long_about = None)]
struct Cli {
    /// URL of the XML sitemap to audit
    #[arg(value_name = "SITEMAP_URL")]
    sitemap_url: String,

    /// Destination path for the CSV report
    #[arg(short, long, default_value = "reports/seo_results.csv")]
    out: PathBuf,

    /// Path to an optional TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Config::default(),
    };

    let summary = run_audit(&config, &cli.sitemap_url, &cli.out)
        .await
        .context("audit run failed")?;

    println!(
        "Report written to {}: {} of {} pages audited ({} skipped)",
        cli.out.display(),
        summary.pages_audited,
        summary.urls_listed,
        summary.pages_skipped
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegrade=info,warn"),
            1 => EnvFilter::new("sitegrade=debug,info"),
            2 => EnvFilter::new("sitegrade=trace,debug"),
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
