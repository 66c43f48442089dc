//! GeoSafe Hub - NYC neighborhood safety scores from your terminal.
//!
//! A terminal-first companion to the GeoSafe dashboard: fetch the
//! neighborhood leaderboard, render safety reports, or serve the web UI.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

mod catalog;
mod charts;
mod cli;
mod client;
mod errors;
mod leaderboard;
mod models;
mod output;
mod report;
mod server;

use cli::{Cli, Command};
use client::SafetyApiClient;
use report::SafetyReport;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Scores(args) => cmd_scores(args),
        Command::Report(args) => cmd_report(args),
        Command::Ui(args) => cmd_ui(args),
    }
}

/// Initialize tracing subscriber.
fn init_tracing(verbose: bool, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Execute the `scores` command - one-shot leaderboard fetch.
fn cmd_scores(args: cli::ScoresArgs) -> Result<()> {
    let config = client::ApiConfig::from_env();
    let api = SafetyApiClient::new(&config).context("failed to create API client")?;

    let scores = api
        .fetch_scores()
        .context("failed to fetch neighborhood scores")?;

    if scores.is_empty() {
        tracing::warn!("safety API returned no scores");
    }

    let ranked = leaderboard::sorted(&scores, args.sort);
    let rows = match args.limit {
        Some(limit) => &ranked[..limit.min(ranked.len())],
        None => leaderboard::visible_rows(&ranked, args.all),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::write_scores(&mut handle, rows, args.sort, args.format)?;

    Ok(())
}

/// Execute the `report` command - safety report for one location.
fn cmd_report(args: cli::ReportArgs) -> Result<()> {
    if let Some(requested) = args.location.as_deref() {
        if !catalog::is_valid_location(requested) {
            tracing::warn!(
                "unknown location '{}', falling back to {}",
                requested,
                catalog::DEFAULT_LOCATION
            );
        }
    }

    let report = SafetyReport::build(args.location.as_deref());
    models::validate_breakdown(report.breakdown)
        .context("crime breakdown table is inconsistent")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::write_report(&mut handle, &report, args.format)?;

    Ok(())
}

/// Execute the `ui` command - start web server.
fn cmd_ui(args: cli::UiArgs) -> Result<()> {
    let config = server::ServerConfig {
        port: args.port,
        host: args.host.clone(),
    };

    let url = format!("http://{}:{}", args.host, args.port);
    let api = client::ApiConfig::from_env();

    // Print startup message
    println!("\x1b[1m🛡️ GeoSafe Hub\x1b[0m");
    println!("\x1b[2m───────────────────────────────────────\x1b[0m");
    println!("  Local:   \x1b[96m{url}\x1b[0m");
    println!("  API:     {}", api.base_url);
    println!("\x1b[2m───────────────────────────────────────\x1b[0m");
    println!("\x1b[2mPress Ctrl+C to stop\x1b[0m\n");

    // Open browser if requested (using xdg-open/open command)
    if args.open {
        #[cfg(target_os = "linux")]
        let _ = std::process::Command::new("xdg-open").arg(&url).spawn();
        #[cfg(target_os = "macos")]
        let _ = std::process::Command::new("open").arg(&url).spawn();
        #[cfg(target_os = "windows")]
        let _ = std::process::Command::new("cmd").args(["/c", "start", &url]).spawn();
    }

    // Run the async server on tokio runtime
    tokio::runtime::Runtime::new()
        .context("failed to create tokio runtime")?
        .block_on(server::run_server(config))
}
