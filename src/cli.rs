//! Command-line interface definitions.
//!
//! Uses clap derive API for argument parsing.

use clap::{Parser, Subcommand};

use crate::leaderboard::SortOrder;
use crate::output::Format;

/// NYC neighborhood safety scores from your terminal.
#[derive(Parser, Debug)]
#[command(name = "geosafe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the neighborhood safety leaderboard (one-shot fetch and exit)
    Scores(ScoresArgs),

    /// Show the safety report for one location
    Report(ReportArgs),

    /// Start the web UI server
    Ui(UiArgs),
}

/// Arguments for the `scores` command.
#[derive(Parser, Debug)]
pub struct ScoresArgs {
    /// Ranking direction
    #[arg(long, default_value = "desc", value_parser = parse_sort)]
    pub sort: SortOrder,

    /// Show every neighborhood instead of the top five
    #[arg(long)]
    pub all: bool,

    /// Maximum number of rows to show (overrides --all)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, short = 'f', default_value = "human", value_parser = parse_format)]
    pub format: Format,
}

/// Arguments for the `report` command.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Borough or neighborhood to report on (defaults to Manhattan)
    #[arg(long, short = 'l')]
    pub location: Option<String>,

    /// Output format
    #[arg(long, short = 'f', default_value = "human", value_parser = parse_format)]
    pub format: Format,
}

/// Arguments for the `ui` command.
#[derive(Parser, Debug)]
pub struct UiArgs {
    /// Port to listen on
    #[arg(long, short = 'p', default_value = "8080")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

/// Parse a sort order from string.
fn parse_sort(s: &str) -> Result<SortOrder, String> {
    s.parse()
}

/// Parse an output format from string.
fn parse_format(s: &str) -> Result<Format, String> {
    s.parse()
}
