//! Web server for the GeoSafe Hub UI.
//!
//! Provides the neighborhood safety dashboard using:
//! - Axum for HTTP server
//! - HTMX for dynamic UI without heavy JavaScript
//! - Server-rendered fragments, with view state carried in query parameters

use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;

use crate::catalog::{self, BOROUGHS};
use crate::charts;
use crate::client::{ApiConfig, SafetyApiClient};
use crate::leaderboard::{self, RankMarker, ScoreBand, SortOrder};
use crate::models::{
    BreakdownSegment, CRIME_BREAKDOWN, CrimeComparison, CrimeStat, NeighborhoodScore, Trend,
    validate_breakdown,
};
use crate::report::{RiskTier, SafetyReport};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Backend connection settings, cloned into blocking fetch tasks
    api: ApiConfig,
}

impl AppState {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }
}

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/leaderboard", get(leaderboard_handler))
        .route("/safety-report", get(report_handler))
        .route("/locations/search", get(search_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    // The pie geometry assumes the breakdown shares cover the full circle.
    validate_breakdown(&CRIME_BREAKDOWN)?;

    let state = AppState::new(ApiConfig::from_env());
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("🛡️ GeoSafe Hub starting at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Query parameters for the leaderboard fragment.
///
/// Both parameters degrade gracefully: unknown sorts rank best-first and
/// anything but `expanded=true` stays collapsed.
#[derive(Debug, Deserialize)]
struct LeaderboardParams {
    sort: Option<String>,
    expanded: Option<String>,
}

/// Query parameters for the safety report page.
#[derive(Debug, Deserialize)]
struct ReportParams {
    location: Option<String>,
}

/// Query parameters for the location search fragment.
#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Main page handler - serves the dashboard shell.
async fn index_handler() -> Html<String> {
    Html(page_shell("GeoSafe Hub · NYC Neighborhood Safety", INDEX_BODY))
}

/// Leaderboard fragment handler.
///
/// Fetches scores on the blocking pool, then renders the ranked list for
/// the requested view. Fetch failures render an explicit error state so
/// the dashboard never goes silently blank.
async fn leaderboard_handler(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Html<String> {
    let sort = SortOrder::from_param(params.sort.as_deref());
    let expanded = matches!(params.expanded.as_deref(), Some("true"));

    let config = state.api.clone();
    let fetched =
        tokio::task::spawn_blocking(move || SafetyApiClient::new(&config)?.fetch_scores()).await;

    let html = match fetched {
        Ok(Ok(scores)) if scores.is_empty() => render_empty_state(),
        Ok(Ok(scores)) => render_leaderboard(&scores, sort, expanded),
        // The client already logged the failure by kind.
        Ok(Err(_)) => render_error_state(sort, expanded),
        Err(err) => {
            tracing::error!("scores fetch task failed: {}", err);
            render_error_state(sort, expanded)
        }
    };

    Html(html)
}

/// Safety report page handler.
async fn report_handler(Query(params): Query<ReportParams>) -> Html<String> {
    let report = SafetyReport::build(params.location.as_deref());
    let title = format!("{} Safety Report · GeoSafe Hub", report.location);
    Html(page_shell(&title, &render_report_body(&report)))
}

/// Location search fragment handler.
async fn search_handler(Query(params): Query<SearchParams>) -> Html<String> {
    Html(render_location_results(params.q.as_deref().unwrap_or("")))
}

/// Health check endpoint.
async fn health_handler() -> &'static str {
    "OK"
}

// ============================================================================
// Fragment Rendering
// ============================================================================

/// Minimal HTML escaping for untrusted text in fragments.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const fn band_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "score-excellent",
        ScoreBand::Good => "score-good",
        ScoreBand::Fair => "score-fair",
        ScoreBand::Poor => "score-poor",
    }
}

const fn band_bar_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "bar-excellent",
        ScoreBand::Good => "bar-good",
        ScoreBand::Fair => "bar-fair",
        ScoreBand::Poor => "bar-poor",
    }
}

const fn tier_class(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => "tier-low",
        RiskTier::Moderate => "tier-moderate",
        RiskTier::High => "tier-high",
    }
}

/// Render the leaderboard fragment for one view of the fetched scores.
fn render_leaderboard(scores: &[NeighborhoodScore], sort: SortOrder, expanded: bool) -> String {
    let ranked = leaderboard::sorted(scores, sort);
    let rows = leaderboard::visible_rows(&ranked, expanded);

    let arrow = match sort {
        SortOrder::Desc => "↓",
        SortOrder::Asc => "↑",
    };

    let mut html = String::with_capacity(4096);
    html.push_str(&format!(
        r##"<div class="board-head">
  <div>
    <h2 class="section-title">NYC Neighborhood Safety Index</h2>
    <p class="section-subtitle">Ranking neighborhoods by safety score</p>
  </div>
  <button class="btn btn-ghost" hx-get="/leaderboard?sort={next_sort}&expanded={expanded}" hx-target="#leaderboard" hx-swap="innerHTML">{arrow} {sort_label}</button>
</div>
<div class="board">"##,
        next_sort = sort.toggled().as_str(),
        sort_label = sort.label(),
    ));

    for (index, row) in rows.iter().enumerate() {
        html.push_str(&render_board_row(index, row, sort));
    }
    html.push_str("</div>");

    if ranked.len() > leaderboard::COLLAPSED_ROWS {
        html.push_str(&format!(
            r##"<div class="board-foot">
  <button class="btn btn-ghost" hx-get="/leaderboard?sort={sort}&expanded={next_expanded}" hx-target="#leaderboard" hx-swap="innerHTML">{label}</button>
</div>"##,
            sort = sort.as_str(),
            next_expanded = !expanded,
            label = leaderboard::expand_label(expanded),
        ));
    }

    html
}

/// Render one leaderboard row. `index` is the position within the
/// displayed list, which is what both rank numbers and medals follow.
fn render_board_row(index: usize, row: &NeighborhoodScore, sort: SortOrder) -> String {
    let rank = match RankMarker::for_row(index, sort) {
        RankMarker::Gold => r#"<span class="rank rank-medal">🥇</span>"#.to_string(),
        RankMarker::Silver => r#"<span class="rank rank-medal">🥈</span>"#.to_string(),
        RankMarker::Bronze => r#"<span class="rank rank-medal">🥉</span>"#.to_string(),
        RankMarker::Number(n) => format!(r#"<span class="rank rank-number">{n}</span>"#),
    };

    let band = ScoreBand::for_score(row.score);
    format!(
        r##"<div class="board-row">
  {rank}
  <a class="row-name" href="{href}">{name}</a>
  <span class="row-score {score_class}">{score:.1}</span>
  <div class="row-bar"><div class="row-bar-fill {bar_class}" style="width: {score:.1}%"></div></div>
</div>"##,
        href = leaderboard::report_href(&row.name),
        name = html_escape(&row.name),
        score_class = band_class(band),
        bar_class = band_bar_class(band),
        score = row.score,
    )
}

fn render_empty_state() -> String {
    r##"<div class="empty-state">
  <div class="empty-icon">🛡️</div>
  <p class="empty-title">No scores yet</p>
  <p class="empty-desc">The safety API returned an empty scoreboard.</p>
</div>"##
        .to_string()
}

/// Error state keeps the requested view in its retry link so a retry
/// lands back on the same sort and window.
fn render_error_state(sort: SortOrder, expanded: bool) -> String {
    format!(
        r##"<div class="error-state">
  <p class="empty-title">Scores unavailable</p>
  <p class="empty-desc">The safety API could not be reached. Retry shortly.</p>
  <button class="btn btn-primary" hx-get="/leaderboard?sort={sort}&expanded={expanded}" hx-target="#leaderboard" hx-swap="innerHTML">Retry</button>
</div>"##,
        sort = sort.as_str(),
    )
}

/// Render the full safety report body for one location.
fn render_report_body(report: &SafetyReport) -> String {
    let tier = tier_class(report.tier);
    let mut html = String::with_capacity(8192);

    html.push_str(&format!(
        r##"<a class="back-link" href="/">← Back to leaderboard</a>
<div class="section-header">
  <div>
    <h1 class="section-title">{name} Safety Report</h1>
    <p class="section-subtitle">Updated {updated}</p>
  </div>
  <span class="tier-badge {tier}">{tier_label}</span>
</div>
<div class="score-hero">
  <span class="score-hero-value {tier}">{score}</span>
  <span class="score-hero-scale">/ 100 safety score</span>
</div>
<div class="score-track"><div class="score-fill {tier}" style="width: {score}%"></div></div>
<div class="score-scale"><span>0</span><span>50</span><span>100</span></div>
<div class="report-grid">"##,
        name = html_escape(report.location),
        updated = report.last_updated,
        tier_label = report.tier.label(),
        score = report.score,
    ));

    html.push_str(&render_crime_card("Low-Profile Crimes", report.low_profile));
    html.push_str(&render_crime_card("Serious Crimes", report.serious));
    html.push_str(&render_breakdown_card(report.breakdown));
    html.push_str(&render_comparison_card(report.comparisons));
    html.push_str(&render_tips_card(report.tips));
    html.push_str("</div>");

    html.push_str(
        r##"<section class="browse">
  <div class="section-header">
    <div>
      <h2 class="section-title">Check Another Location</h2>
    </div>
  </div>
  <input class="search-input" type="search" name="q" placeholder="Search boroughs and neighborhoods"
         hx-get="/locations/search" hx-trigger="load, input changed delay:300ms, search"
         hx-target="#location-results" hx-swap="innerHTML">
  <div id="location-results"></div>
</section>"##,
    );

    html
}

fn render_crime_card(title: &str, stats: &[CrimeStat]) -> String {
    let mut rows = String::new();
    for stat in stats {
        // A falling count is the good direction for crime.
        let trend_class = match stat.trend {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
        };
        rows.push_str(&format!(
            r##"<div class="crime-row">
  <span class="crime-type">{kind}</span>
  <span class="crime-count">{count}</span>
  <span class="crime-trend {trend_class}">{arrow} {percent}%</span>
</div>"##,
            kind = stat.crime_type,
            count = stat.count,
            arrow = stat.trend.arrow(),
            percent = stat.percent,
        ));
    }
    format!(r##"<div class="card"><h3 class="card-title">{title}</h3>{rows}</div>"##)
}

fn render_breakdown_card(segments: &[BreakdownSegment]) -> String {
    let mut legend = String::new();
    for slice in charts::pie_slices(segments) {
        legend.push_str(&format!(
            r##"<div class="legend-item"><span class="legend-swatch" style="background: {color}"></span>{label} · {pct}%</div>"##,
            color = slice.color,
            label = slice.label,
            pct = slice.percentage,
        ));
    }
    format!(
        r##"<div class="card"><h3 class="card-title">Crime Breakdown</h3><div class="breakdown">{svg}<div class="legend">{legend}</div></div></div>"##,
        svg = charts::pie_svg(segments),
    )
}

fn render_comparison_card(comparisons: &[CrimeComparison]) -> String {
    let mut rows = String::new();
    for cmp in comparisons {
        let delta_class = if cmp.below_average() {
            "delta-good"
        } else {
            "delta-bad"
        };
        let max_rate = cmp.location_rate.max(cmp.nyc_average);
        let nyc_width = if max_rate == 0 {
            0.0
        } else {
            f64::from(cmp.nyc_average) / f64::from(max_rate) * 100.0
        };
        rows.push_str(&format!(
            r##"<div class="compare-row">
  <div class="compare-head"><span>{kind}</span><span class="delta-chip {delta_class}">{delta:+}% vs NYC</span></div>
  <div class="compare-bar"><div class="compare-fill compare-here" style="width: {here:.1}%"></div></div>
  <div class="compare-bar"><div class="compare-fill compare-nyc" style="width: {nyc:.1}%"></div></div>
  <div class="compare-scale"><span>Here: {rate}</span><span>NYC average: {avg}</span></div>
</div>"##,
            kind = cmp.crime_type,
            delta = cmp.difference,
            here = cmp.bar_width_percent(),
            nyc = nyc_width,
            rate = cmp.location_rate,
            avg = cmp.nyc_average,
        ));
    }
    format!(
        r##"<div class="card card-wide"><h3 class="card-title">Top Crimes vs NYC Average</h3>{rows}</div>"##
    )
}

fn render_tips_card(tips: &[&str]) -> String {
    let items: String = tips
        .iter()
        .map(|tip| format!("<li>{tip}</li>"))
        .collect();
    format!(
        r##"<div class="card card-wide"><h3 class="card-title">Safety Tips</h3><ul class="tips">{items}</ul><p class="disclaimer">Crime figures above are sample data for demonstration.</p></div>"##
    )
}

/// Render the location browser results.
///
/// An empty query shows the full catalog grouped by borough; otherwise a
/// flat list of case-insensitive substring matches.
fn render_location_results(query: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        let mut html = String::with_capacity(2048);
        for (borough, hoods) in &BOROUGHS {
            html.push_str(&format!(
                r##"<div class="chip-group"><a class="chip chip-borough" href="{href}">{borough}</a>"##,
                href = leaderboard::report_href(borough),
            ));
            for hood in hoods {
                html.push_str(&format!(
                    r##"<a class="chip" href="{href}">{hood}</a>"##,
                    href = leaderboard::report_href(hood),
                ));
            }
            html.push_str("</div>");
        }
        return html;
    }

    let hits = catalog::search_locations(trimmed);
    if hits.is_empty() {
        return format!(
            r##"<p class="empty-desc">No locations match "{}"</p>"##,
            html_escape(trimmed)
        );
    }

    let chips: String = hits
        .iter()
        .map(|name| {
            format!(
                r##"<a class="chip" href="{href}">{name}</a>"##,
                href = leaderboard::report_href(name),
            )
        })
        .collect();
    format!(r##"<div class="chip-group">{chips}</div>"##)
}

// ============================================================================
// Page Chrome (embedded for single-binary deployment)
// ============================================================================

/// Wrap a rendered body in the shared page chrome.
fn page_shell(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en" data-theme="dark">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>

    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">

    <script src="https://unpkg.com/htmx.org@1.9.10"></script>

    <style>{PAGE_CSS}</style>
</head>
<body>
{HEADER_HTML}
    <main class="main">
{body}
    </main>
{FOOTER_HTML}
    <script>{THEME_SCRIPT}</script>
</body>
</html>
"##
    )
}

const HEADER_HTML: &str = r##"    <header class="header">
        <div class="header-inner">
            <a href="/" class="logo">
                <div class="logo-icon">
                    <svg viewBox="0 0 32 32" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <defs>
                            <linearGradient id="logoGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                                <stop offset="0%" style="stop-color:#34d399"/>
                                <stop offset="100%" style="stop-color:#38bdf8"/>
                            </linearGradient>
                        </defs>
                        <path d="M16 3 L27 7 V15 C27 22.5 22.4 27.6 16 29 C9.6 27.6 5 22.5 5 15 V7 Z"
                              stroke="url(#logoGradient)" stroke-width="2" fill="none" opacity="0.85"/>
                        <path d="M11 15.5 L14.5 19 L21 12.5" stroke="url(#logoGradient)" stroke-width="2.5"
                              stroke-linecap="round" stroke-linejoin="round" fill="none"/>
                    </svg>
                </div>
                <span>GeoSafe Hub</span>
            </a>

            <div class="header-actions">
                <a class="btn btn-ghost" href="/safety-report">Safety Report</a>
                <button class="theme-toggle" onclick="toggleTheme()" title="Toggle theme">
                    🌙
                </button>
            </div>
        </div>
    </header>"##;

const FOOTER_HTML: &str = r##"    <footer class="footer">
        <p>Safety scores from the GeoSafe API · Crime figures are sample data · GeoSafe Hub v0.1.0</p>
    </footer>"##;

const INDEX_BODY: &str = r##"        <div id="leaderboard" class="panel" hx-get="/leaderboard" hx-trigger="load" hx-swap="innerHTML">
            <div class="empty-state">
                <div class="empty-icon">◐</div>
                <p class="empty-title">Loading safety scores</p>
                <p class="empty-desc">Fetching the neighborhood leaderboard...</p>
            </div>
        </div>

        <section class="browse">
            <div class="section-header">
                <div>
                    <h2 class="section-title">Browse Locations</h2>
                    <p class="section-subtitle">Jump to the safety report for any borough or neighborhood</p>
                </div>
            </div>
            <input class="search-input" type="search" name="q" placeholder="Search boroughs and neighborhoods"
                   hx-get="/locations/search" hx-trigger="load, input changed delay:300ms, search"
                   hx-target="#location-results" hx-swap="innerHTML">
            <div id="location-results"></div>
        </section>"##;

const PAGE_CSS: &str = r##"
        :root {
            --font: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;

            /* Light Theme */
            --bg-primary: #ffffff;
            --bg-secondary: #f8fafc;
            --bg-tertiary: #f1f5f9;
            --bg-elevated: #ffffff;
            --bg-hover: #f1f5f9;

            --text-primary: #0f172a;
            --text-secondary: #475569;
            --text-tertiary: #94a3b8;

            --border: #e2e8f0;
            --border-hover: #cbd5e1;

            --accent: #10b981;
            --accent-hover: #059669;
            --accent-soft: rgba(16, 185, 129, 0.1);

            --good: #10b981;
            --warn: #eab308;
            --alert: #f97316;
            --danger: #ef4444;

            --shadow-sm: 0 1px 2px rgba(0,0,0,0.05);
            --shadow-md: 0 4px 6px -1px rgba(0,0,0,0.1), 0 2px 4px -2px rgba(0,0,0,0.1);

            --radius-sm: 6px;
            --radius-md: 10px;
            --radius-lg: 16px;
            --radius-full: 9999px;
        }

        [data-theme="dark"] {
            --bg-primary: #09090b;
            --bg-secondary: #0f0f12;
            --bg-tertiary: #18181b;
            --bg-elevated: #1c1c1f;
            --bg-hover: #27272a;

            --text-primary: #fafafa;
            --text-secondary: #a1a1aa;
            --text-tertiary: #52525b;

            --border: #27272a;
            --border-hover: #3f3f46;

            --accent: #34d399;
            --accent-hover: #10b981;
            --accent-soft: rgba(52, 211, 153, 0.1);

            --shadow-sm: 0 1px 2px rgba(0,0,0,0.3);
            --shadow-md: 0 4px 6px -1px rgba(0,0,0,0.4);
        }

        * { margin: 0; padding: 0; box-sizing: border-box; }

        html { scroll-behavior: smooth; }

        body {
            font-family: var(--font);
            background: var(--bg-primary);
            color: var(--text-primary);
            line-height: 1.6;
            min-height: 100vh;
            -webkit-font-smoothing: antialiased;
            -moz-osx-font-smoothing: grayscale;
        }

        body::before {
            content: '';
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            height: 400px;
            background: radial-gradient(ellipse 80% 50% at 50% -20%, var(--accent-soft), transparent);
            pointer-events: none;
            z-index: -1;
        }

        /* ===== HEADER ===== */
        .header {
            position: sticky;
            top: 0;
            z-index: 1000;
            backdrop-filter: blur(12px);
            -webkit-backdrop-filter: blur(12px);
            background: rgba(9, 9, 11, 0.8);
            border-bottom: 1px solid var(--border);
        }

        [data-theme="light"] .header {
            background: rgba(255, 255, 255, 0.8);
        }

        .header-inner {
            max-width: 1100px;
            margin: 0 auto;
            padding: 0.875rem 1.5rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }

        .logo {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            font-weight: 600;
            font-size: 1.125rem;
            color: var(--text-primary);
            text-decoration: none;
            letter-spacing: -0.02em;
        }

        .logo:hover .logo-icon { transform: scale(1.05); }

        .logo-icon {
            width: 32px;
            height: 32px;
            transition: transform 0.2s ease;
        }

        .logo-icon svg { width: 100%; height: 100%; }

        .header-actions {
            display: flex;
            align-items: center;
            gap: 0.75rem;
        }

        .btn {
            display: inline-flex;
            align-items: center;
            gap: 0.375rem;
            padding: 0.5rem 1rem;
            border-radius: var(--radius-md);
            font-size: 0.8125rem;
            font-weight: 500;
            border: none;
            cursor: pointer;
            transition: all 0.15s ease;
            font-family: var(--font);
            text-decoration: none;
        }

        .btn-ghost {
            background: transparent;
            color: var(--text-secondary);
            border: 1px solid var(--border);
        }

        .btn-ghost:hover {
            background: var(--bg-hover);
            border-color: var(--border-hover);
            color: var(--text-primary);
        }

        .btn-primary {
            background: var(--accent);
            color: #052e22;
        }

        .btn-primary:hover {
            background: var(--accent-hover);
            transform: translateY(-1px);
            box-shadow: var(--shadow-md);
        }

        .theme-toggle {
            width: 36px;
            height: 36px;
            border-radius: var(--radius-md);
            border: 1px solid var(--border);
            background: var(--bg-tertiary);
            cursor: pointer;
            display: flex;
            align-items: center;
            justify-content: center;
            transition: all 0.15s;
        }

        .theme-toggle:hover {
            background: var(--bg-hover);
            border-color: var(--border-hover);
        }

        /* ===== MAIN ===== */
        .main {
            max-width: 1100px;
            margin: 0 auto;
            padding: 2rem 1.5rem;
        }

        .section-header {
            display: flex;
            justify-content: space-between;
            align-items: flex-end;
            gap: 1rem;
            flex-wrap: wrap;
            margin-bottom: 1.5rem;
        }

        .section-title {
            font-size: 1.5rem;
            font-weight: 600;
            letter-spacing: -0.025em;
        }

        .section-subtitle {
            font-size: 0.875rem;
            color: var(--text-tertiary);
            margin-top: 0.25rem;
        }

        .panel {
            background: var(--bg-elevated);
            border: 1px solid var(--border);
            border-radius: var(--radius-lg);
            padding: 1.5rem;
            box-shadow: var(--shadow-sm);
        }

        /* ===== LEADERBOARD ===== */
        .board-head {
            display: flex;
            justify-content: space-between;
            align-items: flex-end;
            gap: 1rem;
            flex-wrap: wrap;
            margin-bottom: 1.25rem;
        }

        .board {
            display: grid;
            gap: 0.5rem;
        }

        .board-row {
            display: flex;
            align-items: center;
            gap: 1rem;
            padding: 0.75rem 1rem;
            border: 1px solid var(--border);
            border-radius: var(--radius-md);
            background: var(--bg-secondary);
            transition: all 0.15s ease;
        }

        .board-row:hover {
            border-color: var(--border-hover);
            transform: translateY(-1px);
            box-shadow: var(--shadow-sm);
        }

        .rank {
            flex-shrink: 0;
            width: 2.25rem;
            text-align: center;
            font-weight: 600;
        }

        .rank-medal { font-size: 1.25rem; }
        .rank-number { color: var(--text-tertiary); }

        .row-name {
            flex: 1;
            min-width: 0;
            font-weight: 500;
            color: var(--text-primary);
            text-decoration: none;
        }

        .row-name:hover { color: var(--accent); }

        .row-score {
            font-weight: 700;
            font-variant-numeric: tabular-nums;
        }

        .row-bar {
            flex-shrink: 0;
            width: 160px;
            height: 6px;
            border-radius: var(--radius-full);
            background: var(--bg-tertiary);
            overflow: hidden;
        }

        .row-bar-fill {
            height: 100%;
            border-radius: var(--radius-full);
        }

        .score-excellent { color: var(--good); }
        .score-good { color: var(--warn); }
        .score-fair { color: var(--alert); }
        .score-poor { color: var(--danger); }

        .bar-excellent { background: var(--good); }
        .bar-good { background: var(--warn); }
        .bar-fair { background: var(--alert); }
        .bar-poor { background: var(--danger); }

        .board-foot {
            margin-top: 1rem;
            text-align: center;
        }

        /* ===== LOCATION BROWSER ===== */
        .browse { margin-top: 2.5rem; }

        .search-input {
            width: 100%;
            padding: 0.625rem 1rem;
            border-radius: var(--radius-md);
            border: 1px solid var(--border);
            background: var(--bg-secondary);
            color: var(--text-primary);
            font-family: var(--font);
            font-size: 0.875rem;
            margin-bottom: 1rem;
        }

        .search-input:focus {
            outline: none;
            border-color: var(--accent);
            box-shadow: 0 0 0 3px var(--accent-soft);
        }

        #location-results {
            display: flex;
            flex-direction: column;
            gap: 0.75rem;
        }

        .chip-group {
            display: flex;
            flex-wrap: wrap;
            gap: 0.5rem;
            align-items: center;
        }

        .chip {
            display: inline-flex;
            padding: 0.375rem 0.75rem;
            border-radius: var(--radius-full);
            border: 1px solid var(--border);
            background: var(--bg-secondary);
            color: var(--text-secondary);
            font-size: 0.8125rem;
            text-decoration: none;
            transition: all 0.15s;
        }

        .chip:hover {
            border-color: var(--accent);
            color: var(--text-primary);
            background: var(--accent-soft);
        }

        .chip-borough {
            font-weight: 600;
            color: var(--text-primary);
            background: var(--bg-tertiary);
        }

        /* ===== EMPTY / ERROR STATES ===== */
        .empty-state, .error-state {
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 0.375rem;
            padding: 3rem 2rem;
            text-align: center;
        }

        .empty-icon {
            width: 64px;
            height: 64px;
            border-radius: 50%;
            background: var(--bg-tertiary);
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.5rem;
            margin-bottom: 0.75rem;
        }

        .empty-title {
            font-weight: 500;
            color: var(--text-primary);
        }

        .empty-desc {
            font-size: 0.875rem;
            color: var(--text-tertiary);
        }

        .error-state {
            border: 1px dashed var(--danger);
            border-radius: var(--radius-md);
        }

        .error-state .btn { margin-top: 0.75rem; }

        /* ===== SAFETY REPORT ===== */
        .back-link {
            display: inline-block;
            margin-bottom: 1rem;
            color: var(--text-tertiary);
            text-decoration: none;
            font-size: 0.875rem;
        }

        .back-link:hover { color: var(--accent); }

        .tier-badge {
            padding: 0.375rem 0.875rem;
            border-radius: var(--radius-full);
            font-size: 0.8125rem;
            font-weight: 600;
        }

        .tier-low { background: rgba(16, 185, 129, 0.12); color: var(--good); }
        .tier-moderate { background: rgba(234, 179, 8, 0.12); color: var(--warn); }
        .tier-high { background: rgba(239, 68, 68, 0.12); color: var(--danger); }

        .score-hero {
            display: flex;
            align-items: baseline;
            gap: 0.5rem;
            margin-bottom: 0.75rem;
        }

        .score-hero-value {
            font-size: 3.5rem;
            font-weight: 700;
            letter-spacing: -0.05em;
            line-height: 1;
        }

        .score-hero-value.tier-low { background: none; color: var(--good); }
        .score-hero-value.tier-moderate { background: none; color: var(--warn); }
        .score-hero-value.tier-high { background: none; color: var(--danger); }

        .score-hero-scale {
            color: var(--text-tertiary);
            font-size: 1.125rem;
        }

        .score-track {
            height: 8px;
            border-radius: var(--radius-full);
            background: var(--bg-tertiary);
            overflow: hidden;
        }

        .score-fill {
            height: 100%;
            border-radius: var(--radius-full);
        }

        .score-fill.tier-low { background: var(--good); }
        .score-fill.tier-moderate { background: var(--warn); }
        .score-fill.tier-high { background: var(--danger); }

        .score-scale {
            display: flex;
            justify-content: space-between;
            margin-top: 0.375rem;
            margin-bottom: 1.5rem;
            font-size: 0.75rem;
            color: var(--text-tertiary);
        }

        .report-grid {
            display: grid;
            grid-template-columns: repeat(2, minmax(0, 1fr));
            gap: 1rem;
        }

        .card {
            background: var(--bg-elevated);
            border: 1px solid var(--border);
            border-radius: var(--radius-lg);
            padding: 1.25rem;
            box-shadow: var(--shadow-sm);
        }

        .card-wide { grid-column: 1 / -1; }

        .card-title {
            font-size: 0.9375rem;
            font-weight: 600;
            margin-bottom: 1rem;
        }

        .crime-row {
            display: flex;
            align-items: center;
            justify-content: space-between;
            gap: 0.75rem;
            padding: 0.5rem 0;
            border-bottom: 1px solid var(--border);
            font-size: 0.875rem;
        }

        .crime-row:last-child { border-bottom: none; }

        .crime-type { color: var(--text-secondary); flex: 1; }

        .crime-count {
            font-weight: 600;
            font-variant-numeric: tabular-nums;
        }

        .crime-trend {
            font-size: 0.8125rem;
            font-weight: 600;
            width: 4rem;
            text-align: right;
        }

        .trend-down { color: var(--good); }
        .trend-up { color: var(--danger); }

        .breakdown {
            display: flex;
            gap: 1.5rem;
            align-items: center;
            flex-wrap: wrap;
        }

        .breakdown .pie {
            width: 160px;
            height: 160px;
            flex-shrink: 0;
        }

        .legend {
            display: grid;
            gap: 0.375rem;
            font-size: 0.8125rem;
            color: var(--text-secondary);
        }

        .legend-item {
            display: flex;
            align-items: center;
            gap: 0.5rem;
        }

        .legend-swatch {
            width: 10px;
            height: 10px;
            border-radius: 3px;
            flex-shrink: 0;
        }

        .compare-row {
            padding: 0.75rem 0;
            border-bottom: 1px solid var(--border);
        }

        .compare-row:last-child { border-bottom: none; }

        .compare-head {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 0.5rem;
            font-size: 0.875rem;
            font-weight: 500;
        }

        .delta-chip {
            font-size: 0.75rem;
            font-weight: 600;
            padding: 0.125rem 0.5rem;
            border-radius: var(--radius-full);
        }

        .delta-good { background: rgba(16, 185, 129, 0.12); color: var(--good); }
        .delta-bad { background: rgba(239, 68, 68, 0.12); color: var(--danger); }

        .compare-bar {
            height: 8px;
            border-radius: var(--radius-full);
            background: var(--bg-tertiary);
            overflow: hidden;
            margin-bottom: 0.375rem;
        }

        .compare-fill {
            height: 100%;
            border-radius: var(--radius-full);
        }

        .compare-here { background: var(--accent); }
        .compare-nyc { background: var(--text-tertiary); }

        .compare-scale {
            display: flex;
            justify-content: space-between;
            font-size: 0.75rem;
            color: var(--text-tertiary);
        }

        .tips {
            list-style: none;
            display: grid;
            gap: 0.5rem;
        }

        .tips li {
            display: flex;
            gap: 0.5rem;
            font-size: 0.875rem;
            color: var(--text-secondary);
        }

        .tips li::before {
            content: '✓';
            color: var(--accent);
            font-weight: 700;
        }

        .disclaimer {
            margin-top: 1rem;
            font-size: 0.75rem;
            color: var(--text-tertiary);
        }

        /* ===== FOOTER ===== */
        .footer {
            border-top: 1px solid var(--border);
            padding: 1.5rem;
            text-align: center;
            font-size: 0.8125rem;
            color: var(--text-tertiary);
            margin-top: 3rem;
        }

        .footer a {
            color: var(--text-secondary);
            text-decoration: none;
            transition: color 0.15s;
        }

        .footer a:hover { color: var(--accent); }

        /* ===== RESPONSIVE ===== */
        @media (max-width: 768px) {
            .header-inner { padding: 0.75rem 1rem; }
            .main { padding: 1.25rem 1rem; }
            .report-grid { grid-template-columns: 1fr; }
            .row-bar { width: 90px; }
            .score-hero-value { font-size: 2.75rem; }
        }
"##;

const THEME_SCRIPT: &str = r##"
        function toggleTheme() {
            const html = document.documentElement;
            const current = html.getAttribute('data-theme');
            const next = current === 'dark' ? 'light' : 'dark';
            html.setAttribute('data-theme', next);
            document.querySelector('.theme-toggle').textContent = next === 'dark' ? '🌙' : '☀️';
            localStorage.setItem('theme', next);
        }

        const savedTheme = localStorage.getItem('theme') || 'dark';
        document.documentElement.setAttribute('data-theme', savedTheme);
        document.querySelector('.theme-toggle').textContent = savedTheme === 'dark' ? '🌙' : '☀️';
"##;
