//! Safety report assembly.
//!
//! Builds the full per-location report: resolved location, mock score,
//! risk tier, the fixed crime tables, and the advice list. The data is
//! sample material wired for presentation, so everything except the
//! freshness stamp is borrowed from process-wide constants.

use chrono::Local;

use crate::catalog;
use crate::models::{
    BreakdownSegment, CRIME_BREAKDOWN, CrimeComparison, CrimeStat, LOW_PROFILE_CRIMES,
    SERIOUS_CRIMES, TOP_CRIMES_COMPARISON,
};

/// Advice shown at the bottom of every report.
pub const SAFETY_TIPS: [&str; 4] = [
    "Stay aware of your surroundings, especially at night",
    "Keep valuables out of sight when walking in public",
    "Use well-lit and populated streets when possible",
    "Report suspicious activity to local authorities",
];

/// Risk classification for a location's overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Above 70 is low risk, above 40 moderate, everything else high.
    /// Both cut-offs are exclusive, so a score of exactly 70 reads as
    /// moderate and exactly 40 as high.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score > 70 {
            Self::Low
        } else if score > 40 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

/// Everything the report view needs for one location.
#[derive(Debug, Clone)]
pub struct SafetyReport {
    pub location: &'static str,
    pub score: u32,
    pub tier: RiskTier,
    pub last_updated: String,
    pub low_profile: &'static [CrimeStat],
    pub serious: &'static [CrimeStat],
    pub breakdown: &'static [BreakdownSegment],
    pub comparisons: &'static [CrimeComparison],
    pub tips: &'static [&'static str],
}

impl SafetyReport {
    /// Build the report for a requested location. Absent or unknown
    /// locations fall back to the catalog default rather than erroring.
    #[must_use]
    pub fn build(requested: Option<&str>) -> Self {
        let location = catalog::resolve_location(requested);
        let score = catalog::mock_score(location);
        Self {
            location,
            score,
            tier: RiskTier::from_score(score),
            last_updated: freshness_stamp(),
            low_profile: &LOW_PROFILE_CRIMES,
            serious: &SERIOUS_CRIMES,
            breakdown: &CRIME_BREAKDOWN,
            comparisons: &TOP_CRIMES_COMPARISON,
            tips: &SAFETY_TIPS,
        }
    }
}

/// Report-header stamp in the form `Today at 9:45 AM`.
#[must_use]
pub fn freshness_stamp() -> String {
    Local::now().format("Today at %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RiskTier::from_score(100), RiskTier::Low);
        assert_eq!(RiskTier::from_score(71), RiskTier::Low);
        assert_eq!(RiskTier::from_score(70), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(41), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(40), RiskTier::High);
        assert_eq!(RiskTier::from_score(0), RiskTier::High);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(RiskTier::Low.label(), "Low Risk");
        assert_eq!(RiskTier::Moderate.label(), "Moderate Risk");
        assert_eq!(RiskTier::High.label(), "High Risk");
    }

    #[test]
    fn test_build_default_location() {
        let report = SafetyReport::build(None);
        assert_eq!(report.location, "Manhattan");
        assert_eq!(report.score, 73);
        assert_eq!(report.tier, RiskTier::Low);
    }

    #[test]
    fn test_build_unknown_falls_back() {
        let report = SafetyReport::build(Some("Gotham"));
        assert_eq!(report.location, "Manhattan");
        assert_eq!(report.score, 73);
    }

    #[test]
    fn test_build_scored_locations() {
        let bay_ridge = SafetyReport::build(Some("Bay Ridge"));
        assert_eq!(bay_ridge.score, 76);
        assert_eq!(bay_ridge.tier, RiskTier::Low);

        let harlem = SafetyReport::build(Some("Harlem"));
        assert_eq!(harlem.score, 65);
        assert_eq!(harlem.tier, RiskTier::Moderate);

        let bronx = SafetyReport::build(Some("Bronx"));
        assert_eq!(bronx.score, 62);
        assert_eq!(bronx.tier, RiskTier::Moderate);
    }

    #[test]
    fn test_build_default_score_is_moderate() {
        // Astoria is valid but unscored; the table default of 70 sits on
        // the moderate side of the exclusive low-risk cut-off.
        let report = SafetyReport::build(Some("Astoria"));
        assert_eq!(report.location, "Astoria");
        assert_eq!(report.score, 70);
        assert_eq!(report.tier, RiskTier::Moderate);
    }

    #[test]
    fn test_report_carries_fixed_tables() {
        let report = SafetyReport::build(None);
        assert_eq!(report.low_profile.len(), 4);
        assert_eq!(report.serious.len(), 4);
        assert_eq!(report.breakdown.len(), 6);
        assert_eq!(report.comparisons.len(), 3);
        assert_eq!(report.tips.len(), 4);
    }

    #[test]
    fn test_freshness_stamp_shape() {
        let stamp = freshness_stamp();
        assert!(stamp.starts_with("Today at "));
        assert!(stamp.ends_with("AM") || stamp.ends_with("PM"));
    }
}
