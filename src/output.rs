//! Output formatters for scores and safety reports.
//!
//! Supports human-readable (with colors), JSON, and NDJSON formats.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::json;

use crate::leaderboard::{RankMarker, ScoreBand, SortOrder};
use crate::models::{CrimeStat, NeighborhoodScore, Trend};
use crate::report::{RiskTier, SafetyReport};

// ANSI color codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// Score band colors
const GREEN: &str = "\x1b[92m"; // score >= 80
const YELLOW: &str = "\x1b[93m"; // score >= 60
const ORANGE: &str = "\x1b[38;5;208m"; // score >= 40
const RED: &str = "\x1b[91m"; // everything below

// Icons for the top three ranks and the report header
const ICON_GOLD: &str = "🥇";
const ICON_SILVER: &str = "🥈";
const ICON_BRONZE: &str = "🥉";
const ICON_SHIELD: &str = "🛡️";

const BAR_WIDTH: usize = 20;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable terminal output (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// Newline-delimited JSON (one object per line)
    Ndjson,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "ndjson" => Ok(Self::Ndjson),
            _ => Err(format!("unknown format: {s} (expected: human, json, ndjson)")),
        }
    }
}

/// Color code for a leaderboard score.
fn band_color(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => GREEN,
        ScoreBand::Good => YELLOW,
        ScoreBand::Fair => ORANGE,
        ScoreBand::Poor => RED,
    }
}

/// Color code for a report risk tier.
fn tier_color(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => GREEN,
        RiskTier::Moderate => YELLOW,
        RiskTier::High => RED,
    }
}

/// Rank column cell: a medal for the podium, a number otherwise.
fn rank_cell(marker: RankMarker) -> String {
    match marker {
        RankMarker::Gold => ICON_GOLD.to_string(),
        RankMarker::Silver => ICON_SILVER.to_string(),
        RankMarker::Bronze => ICON_BRONZE.to_string(),
        RankMarker::Number(n) => format!("{n:>2}."),
    }
}

/// Proportional bar over a 0 to 100 scale.
fn score_bar(score: f64) -> String {
    let filled = ((score / 100.0) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Write sorted leaderboard rows in human-readable format with colors.
///
/// `order` decides whether the podium gets medals.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_scores_human<W: Write>(
    writer: &mut W,
    rows: &[NeighborhoodScore],
    order: SortOrder,
) -> io::Result<()> {
    for (i, row) in rows.iter().enumerate() {
        let marker = rank_cell(RankMarker::for_row(i, order));
        let color = band_color(ScoreBand::for_score(row.score));
        let bar = score_bar(row.score);

        writeln!(
            writer,
            "{marker} {:<22} │ {color}{BOLD}{:>5.1}{RESET} │ {color}{bar}{RESET}",
            row.name, row.score
        )?;
    }
    Ok(())
}

/// Flattened leaderboard row for JSON output.
#[derive(Debug, Serialize)]
struct ScoreRow<'a> {
    rank: usize,
    name: &'a str,
    score: f64,
}

fn score_rows(rows: &[NeighborhoodScore]) -> Vec<ScoreRow<'_>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| ScoreRow {
            rank: i + 1,
            name: &row.name,
            score: row.score,
        })
        .collect()
}

/// Write leaderboard rows as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_scores_json<W: Write>(writer: &mut W, rows: &[NeighborhoodScore]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&score_rows(rows))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{json}")
}

/// Write leaderboard rows as newline-delimited JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_scores_ndjson<W: Write>(writer: &mut W, rows: &[NeighborhoodScore]) -> io::Result<()> {
    for row in score_rows(rows) {
        let json =
            serde_json::to_string(&row).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{json}")?;
    }
    Ok(())
}

/// Write leaderboard rows in the specified format.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_scores<W: Write>(
    writer: &mut W,
    rows: &[NeighborhoodScore],
    order: SortOrder,
    format: Format,
) -> io::Result<()> {
    match format {
        Format::Human => write_scores_human(writer, rows, order),
        Format::Json => write_scores_json(writer, rows),
        Format::Ndjson => write_scores_ndjson(writer, rows),
    }
}

fn write_crime_table<W: Write>(writer: &mut W, stats: &[CrimeStat]) -> io::Result<()> {
    for stat in stats {
        // A falling count is the good direction for crime.
        let trend_color = match stat.trend {
            Trend::Down => GREEN,
            Trend::Up => RED,
        };
        writeln!(
            writer,
            "   {:<20} {:>5} │ {trend_color}{} {}%{RESET}",
            stat.crime_type,
            stat.count,
            stat.trend.arrow(),
            stat.percent
        )?;
    }
    Ok(())
}

/// Write a safety report in human-readable format.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report_human<W: Write>(writer: &mut W, report: &SafetyReport) -> io::Result<()> {
    let tier = tier_color(report.tier);

    writeln!(
        writer,
        "{ICON_SHIELD} {BOLD}{} Safety Report{RESET} {DIM}({}){RESET}",
        report.location, report.last_updated
    )?;
    writeln!(
        writer,
        "   Safety score {tier}{BOLD}{}{RESET}/100 {tier}[{}]{RESET}",
        report.score,
        report.tier.label()
    )?;
    writeln!(
        writer,
        "   {tier}{}{RESET}",
        score_bar(f64::from(report.score))
    )?;
    writeln!(writer)?;

    writeln!(writer, "{BOLD}Low-profile crimes{RESET}")?;
    write_crime_table(writer, report.low_profile)?;
    writeln!(writer)?;

    writeln!(writer, "{BOLD}Serious crimes{RESET}")?;
    write_crime_table(writer, report.serious)?;
    writeln!(writer)?;

    writeln!(writer, "{BOLD}Crime breakdown{RESET}")?;
    for segment in report.breakdown {
        writeln!(
            writer,
            "   {:<14} {:>4.0}% {DIM}{}{RESET}",
            segment.crime_type,
            segment.percentage,
            score_bar(segment.percentage)
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "{BOLD}Top crimes vs NYC average{RESET}")?;
    for cmp in report.comparisons {
        let delta_color = if cmp.below_average() { GREEN } else { RED };
        writeln!(
            writer,
            "   {:<14} here {:>3} {} │ NYC {:>3} {delta_color}({:+}%){RESET}",
            cmp.crime_type,
            cmp.location_rate,
            score_bar(cmp.bar_width_percent()),
            cmp.nyc_average,
            cmp.difference
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "{BOLD}Safety tips{RESET}")?;
    for tip in report.tips {
        writeln!(writer, "   • {tip}")?;
    }
    Ok(())
}

fn report_value(report: &SafetyReport) -> serde_json::Value {
    json!({
        "location": report.location,
        "score": report.score,
        "risk": report.tier.label(),
        "last_updated": report.last_updated,
        "low_profile_crimes": report.low_profile,
        "serious_crimes": report.serious,
        "crime_breakdown": report.breakdown,
        "top_crimes_vs_nyc": report.comparisons,
        "safety_tips": report.tips,
    })
}

/// Write a safety report in the specified format.
///
/// NDJSON emits the report as one compact JSON line.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &SafetyReport,
    format: Format,
) -> io::Result<()> {
    match format {
        Format::Human => write_report_human(writer, report),
        Format::Json => {
            let json = serde_json::to_string_pretty(&report_value(report))
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(writer, "{json}")
        }
        Format::Ndjson => {
            let json = serde_json::to_string(&report_value(report))
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(writer, "{json}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<NeighborhoodScore> {
        vec![
            NeighborhoodScore::new("DUMBO", 72.0),
            NeighborhoodScore::new("Astoria", 70.0),
            NeighborhoodScore::new("Harlem", 65.0),
        ]
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("human".parse::<Format>().unwrap(), Format::Human);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("ndjson".parse::<Format>().unwrap(), Format::Ndjson);
        assert!("invalid".parse::<Format>().is_err());
    }

    #[test]
    fn test_human_scores_medal_and_precision() {
        let mut buf = Vec::new();
        write_scores_human(&mut buf, &sample_rows(), SortOrder::Desc).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains(ICON_GOLD));
        assert!(out.contains("DUMBO"));
        assert!(out.contains("72.0"));
    }

    #[test]
    fn test_human_scores_asc_numbers_only() {
        let mut buf = Vec::new();
        write_scores_human(&mut buf, &sample_rows(), SortOrder::Asc).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(!out.contains(ICON_GOLD));
        assert!(out.contains(" 1."));
        assert!(out.contains(" 3."));
    }

    #[test]
    fn test_ndjson_scores_one_line_per_row() {
        let mut buf = Vec::new();
        write_scores_ndjson(&mut buf, &sample_rows()).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["rank"], 1);
        assert_eq!(first["name"], "DUMBO");
    }

    #[test]
    fn test_report_human_sections() {
        let report = SafetyReport::build(Some("Harlem"));
        let mut buf = Vec::new();
        write_report_human(&mut buf, &report).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.contains("Harlem Safety Report"));
        assert!(out.contains("Moderate Risk"));
        assert!(out.contains("Petty Theft"));
        assert!(out.contains("Safety tips"));
    }

    #[test]
    fn test_report_human_renders_score_bar() {
        // Manhattan's 73 over the 20-cell bar rounds to 15 filled cells.
        let report = SafetyReport::build(None);
        let mut buf = Vec::new();
        write_report_human(&mut buf, &report).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let bar = format!("{}{}", "█".repeat(15), "░".repeat(5));
        assert!(out.contains(&bar));
    }

    #[test]
    fn test_report_json_round_trips_fields() {
        let report = SafetyReport::build(None);
        let mut buf = Vec::new();
        write_report(&mut buf, &report, Format::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["location"], "Manhattan");
        assert_eq!(value["score"], 73);
        assert_eq!(value["risk"], "Low Risk");
        assert_eq!(value["crime_breakdown"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_score_bar_extremes() {
        assert_eq!(score_bar(100.0), "█".repeat(BAR_WIDTH));
        assert_eq!(score_bar(0.0), "░".repeat(BAR_WIDTH));
    }
}
