//! Leaderboard view logic.
//!
//! Pure ordering and presentation rules for the scores list: sort order,
//! the collapsed five-row window, rank medals, and score color bands.
//! Rendering (terminal or HTML) lives elsewhere.

use std::str::FromStr;

use crate::models::NeighborhoodScore;

/// Rows shown while the leaderboard is collapsed.
pub const COLLAPSED_ROWS: usize = 5;

/// Direction of the score ranking. Best-first is the default view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    /// The opposite order, for the sort toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Desc => Self::Asc,
            Self::Asc => Self::Desc,
        }
    }

    /// Query-parameter form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desc => "desc",
            Self::Asc => "asc",
        }
    }

    /// Toggle label describing the current order.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Desc => "Highest First",
            Self::Asc => "Lowest First",
        }
    }

    /// Lenient parse for query parameters: anything but `asc` ranks best-first.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desc" | "descending" => Ok(Self::Desc),
            "asc" | "ascending" => Ok(Self::Asc),
            other => Err(format!("unknown sort order '{other}' (use asc or desc)")),
        }
    }
}

/// Label for the expand toggle, describing the action it performs.
#[must_use]
pub const fn expand_label(expanded: bool) -> &'static str {
    if expanded {
        "Show Less"
    } else {
        "Show All Neighborhoods"
    }
}

/// Sort a fetched score list for display.
///
/// The sort is stable, so neighborhoods with equal scores keep their
/// fetched order and toggling the direction twice reproduces the
/// original view.
#[must_use]
pub fn sorted(scores: &[NeighborhoodScore], order: SortOrder) -> Vec<NeighborhoodScore> {
    let mut rows = scores.to_vec();
    match order {
        SortOrder::Desc => rows.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortOrder::Asc => rows.sort_by(|a, b| a.score.total_cmp(&b.score)),
    }
    rows
}

/// The slice of sorted rows actually shown: everything when expanded,
/// otherwise at most [`COLLAPSED_ROWS`].
#[must_use]
pub fn visible_rows(rows: &[NeighborhoodScore], expanded: bool) -> &[NeighborhoodScore] {
    if expanded {
        rows
    } else {
        &rows[..rows.len().min(COLLAPSED_ROWS)]
    }
}

/// Rank decoration for one displayed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMarker {
    Gold,
    Silver,
    Bronze,
    Number(usize),
}

impl RankMarker {
    /// Marker for the row at `index` within the displayed list.
    ///
    /// Medals decorate the top three only while ranking best-first;
    /// ascending views number every row so a low score never earns gold.
    #[must_use]
    pub const fn for_row(index: usize, order: SortOrder) -> Self {
        match (order, index) {
            (SortOrder::Desc, 0) => Self::Gold,
            (SortOrder::Desc, 1) => Self::Silver,
            (SortOrder::Desc, 2) => Self::Bronze,
            _ => Self::Number(index + 1),
        }
    }
}

/// Color band for a leaderboard score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Relative link to the safety report for a leaderboard entry.
#[must_use]
pub fn report_href(location: &str) -> String {
    format!("/safety-report?location={}", urlencoding::encode(location))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<NeighborhoodScore> {
        vec![
            NeighborhoodScore::new("Harlem", 65.0),
            NeighborhoodScore::new("DUMBO", 91.0),
            NeighborhoodScore::new("Astoria", 40.0),
        ]
    }

    #[test]
    fn test_sort_order_default_is_desc() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }

    #[test]
    fn test_sort_order_toggle_round_trips() {
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(SortOrder::Desc.toggled().toggled(), SortOrder::Desc);
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_order_from_param_defaults_to_desc() {
        assert_eq!(SortOrder::from_param(None), SortOrder::Desc);
        assert_eq!(SortOrder::from_param(Some("garbage")), SortOrder::Desc);
        assert_eq!(SortOrder::from_param(Some("asc")), SortOrder::Asc);
    }

    #[test]
    fn test_sorted_desc_puts_best_first() {
        let rows = sorted(&sample(), SortOrder::Desc);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["DUMBO", "Harlem", "Astoria"]);
    }

    #[test]
    fn test_sorted_is_monotonic_both_ways() {
        let desc = sorted(&sample(), SortOrder::Desc);
        for pair in desc.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        let asc = sorted(&sample(), SortOrder::Asc);
        for pair in asc.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn test_sorted_is_stable_on_ties() {
        let data = vec![
            NeighborhoodScore::new("First", 70.0),
            NeighborhoodScore::new("Second", 70.0),
            NeighborhoodScore::new("Third", 70.0),
        ];
        let rows = sorted(&data, SortOrder::Desc);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn test_double_toggle_restores_view() {
        let first = sorted(&sample(), SortOrder::Desc);
        let after = sorted(&sample(), SortOrder::Desc.toggled().toggled());
        assert_eq!(first, after);
    }

    #[test]
    fn test_visible_rows_collapsed_window() {
        let many: Vec<NeighborhoodScore> = (0..8)
            .map(|i| NeighborhoodScore::new(format!("N{i}"), f64::from(i)))
            .collect();
        assert_eq!(visible_rows(&many, false).len(), COLLAPSED_ROWS);
        assert_eq!(visible_rows(&many, true).len(), 8);

        let few = sample();
        assert_eq!(visible_rows(&few, false).len(), 3);
    }

    #[test]
    fn test_rank_markers_desc() {
        assert_eq!(RankMarker::for_row(0, SortOrder::Desc), RankMarker::Gold);
        assert_eq!(RankMarker::for_row(1, SortOrder::Desc), RankMarker::Silver);
        assert_eq!(RankMarker::for_row(2, SortOrder::Desc), RankMarker::Bronze);
        assert_eq!(
            RankMarker::for_row(3, SortOrder::Desc),
            RankMarker::Number(4)
        );
    }

    #[test]
    fn test_rank_markers_asc_never_medal() {
        for i in 0..5 {
            assert_eq!(
                RankMarker::for_row(i, SortOrder::Asc),
                RankMarker::Number(i + 1)
            );
        }
    }

    #[test]
    fn test_top_row_medal_follows_sort() {
        let desc = sorted(&sample(), SortOrder::Desc);
        assert_eq!(desc[0].name, "DUMBO");
        assert_eq!(RankMarker::for_row(0, SortOrder::Desc), RankMarker::Gold);
    }

    #[test]
    fn test_score_band_boundaries() {
        assert_eq!(ScoreBand::for_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(60.0), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(59.9), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(40.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(39.9), ScoreBand::Poor);
    }

    #[test]
    fn test_report_href_encodes_spaces() {
        assert_eq!(
            report_href("Upper East Side"),
            "/safety-report?location=Upper%20East%20Side"
        );
        assert_eq!(report_href("DUMBO"), "/safety-report?location=DUMBO");
    }

    #[test]
    fn test_expand_labels() {
        assert_eq!(expand_label(false), "Show All Neighborhoods");
        assert_eq!(expand_label(true), "Show Less");
    }
}
