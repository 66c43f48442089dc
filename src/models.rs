//! Data models for the safety dashboard.
//!
//! The leaderboard half is decoded from the scoring API's JSON payload;
//! the report half is the fixed sample data the report page renders.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::GeosafeError;

/// One leaderboard entry: a neighborhood and its 0-100 safety score
/// (higher = safer).
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborhoodScore {
    pub name: String,
    pub score: f64,
}

impl NeighborhoodScore {
    /// Create an entry, clamping the score into the 0-100 range the
    /// bar-width rendering depends on.
    #[must_use]
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score: score.clamp(0.0, 100.0),
        }
    }
}

/// A score as the API sends it: a JSON number, or a number encoded as a
/// string. Both coerce to a finite `f64`; anything else is a decode error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

impl RawScore {
    fn coerce(&self) -> Result<f64, GeosafeError> {
        let score = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().map_err(|_| {
                GeosafeError::Validation(format!("score is not numeric: {s:?}"))
            })?,
        };
        // "NaN" and "inf" parse as f64 but are not usable scores.
        if score.is_finite() {
            Ok(score)
        } else {
            Err(GeosafeError::Validation(format!(
                "score is not finite: {score}"
            )))
        }
    }
}

/// Decode the `all-neighborhoods-scores` payload: a JSON object mapping
/// neighborhood name to score.
///
/// Entry order is whatever the map iteration yields; callers sort before
/// display. Out-of-range scores are clamped (with a warning) rather than
/// rejected.
///
/// # Errors
///
/// Returns an error if the body is not a JSON object or a score is neither
/// a number nor a numeric string.
pub fn parse_scores(json: &str) -> Result<Vec<NeighborhoodScore>, GeosafeError> {
    let raw: HashMap<String, RawScore> = serde_json::from_str(json)?;

    let mut entries = Vec::with_capacity(raw.len());
    for (name, raw_score) in raw {
        let score = raw_score.coerce()?;
        if !(0.0..=100.0).contains(&score) {
            tracing::warn!("score {score} for {name:?} outside 0-100, clamping");
        }
        entries.push(NeighborhoodScore::new(name, score));
    }
    Ok(entries)
}

/// Year-over-year direction of a crime statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
        }
    }
}

/// One row of a crime statistics table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrimeStat {
    #[serde(rename = "type")]
    pub crime_type: &'static str,
    pub count: u32,
    pub trend: Trend,
    pub percent: u32,
}

/// Sample low-profile crime statistics (fixed report data).
pub const LOW_PROFILE_CRIMES: [CrimeStat; 4] = [
    CrimeStat {
        crime_type: "Petty Theft",
        count: 127,
        trend: Trend::Down,
        percent: 12,
    },
    CrimeStat {
        crime_type: "Vandalism",
        count: 89,
        trend: Trend::Down,
        percent: 15,
    },
    CrimeStat {
        crime_type: "Public Intoxication",
        count: 62,
        trend: Trend::Up,
        percent: 8,
    },
    CrimeStat {
        crime_type: "Trespassing",
        count: 43,
        trend: Trend::Down,
        percent: 5,
    },
];

/// Sample serious crime statistics (fixed report data).
pub const SERIOUS_CRIMES: [CrimeStat; 4] = [
    CrimeStat {
        crime_type: "Assault",
        count: 38,
        trend: Trend::Down,
        percent: 10,
    },
    CrimeStat {
        crime_type: "Burglary",
        count: 24,
        trend: Trend::Up,
        percent: 5,
    },
    CrimeStat {
        crime_type: "Vehicle Theft",
        count: 19,
        trend: Trend::Down,
        percent: 15,
    },
    CrimeStat {
        crime_type: "Robbery",
        count: 12,
        trend: Trend::Down,
        percent: 20,
    },
];

/// One slice of the crime-breakdown pie chart.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BreakdownSegment {
    #[serde(rename = "type")]
    pub crime_type: &'static str,
    pub percentage: f64,
}

/// Crime breakdown segments; percentages sum to 100.
pub const CRIME_BREAKDOWN: [BreakdownSegment; 6] = [
    BreakdownSegment {
        crime_type: "Petty Theft",
        percentage: 32.0,
    },
    BreakdownSegment {
        crime_type: "Vandalism",
        percentage: 22.0,
    },
    BreakdownSegment {
        crime_type: "Assault",
        percentage: 15.0,
    },
    BreakdownSegment {
        crime_type: "Burglary",
        percentage: 12.0,
    },
    BreakdownSegment {
        crime_type: "Vehicle Theft",
        percentage: 10.0,
    },
    BreakdownSegment {
        crime_type: "Other",
        percentage: 9.0,
    },
];

/// Check that a breakdown covers the whole pie.
///
/// The chart geometry assumes the shares sum to 100; a set that doesn't
/// would leave a gap or overlap, so reject it up front.
///
/// # Errors
///
/// Returns a validation error when the sum is off by more than 0.01.
pub fn validate_breakdown(segments: &[BreakdownSegment]) -> Result<(), GeosafeError> {
    let total: f64 = segments.iter().map(|s| s.percentage).sum();
    if (total - 100.0).abs() > 0.01 {
        return Err(GeosafeError::Validation(format!(
            "breakdown percentages sum to {total}, expected 100"
        )));
    }
    Ok(())
}

/// Location-vs-citywide comparison for one crime type.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrimeComparison {
    #[serde(rename = "type")]
    pub crime_type: &'static str,
    pub location_rate: u32,
    pub nyc_average: u32,
    /// Signed percent difference against the citywide average
    /// (negative = better than average).
    pub difference: i32,
}

impl CrimeComparison {
    /// Bar fill for the location's rate, as a percentage of the larger of
    /// the two rates.
    #[must_use]
    pub fn bar_width_percent(&self) -> f64 {
        let max = self.location_rate.max(self.nyc_average);
        if max == 0 {
            return 0.0;
        }
        f64::from(self.location_rate) / f64::from(max) * 100.0
    }

    /// True when the location runs below the citywide average.
    #[must_use]
    pub const fn below_average(&self) -> bool {
        self.difference < 0
    }
}

/// Top-3 crime comparison against the citywide average (fixed report data).
pub const TOP_CRIMES_COMPARISON: [CrimeComparison; 3] = [
    CrimeComparison {
        crime_type: "Petty Theft",
        location_rate: 127,
        nyc_average: 145,
        difference: -12,
    },
    CrimeComparison {
        crime_type: "Vandalism",
        location_rate: 89,
        nyc_average: 78,
        difference: 14,
    },
    CrimeComparison {
        crime_type: "Assault",
        location_rate: 38,
        nyc_average: 42,
        difference: -10,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_scores() {
        let scores = parse_scores(r#"{"Harlem": 65, "DUMBO": 91.5}"#).expect("failed to parse");
        assert_eq!(scores.len(), 2);

        let dumbo = scores
            .iter()
            .find(|s| s.name == "DUMBO")
            .expect("missing DUMBO");
        assert!((dumbo.score - 91.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_string_encoded_scores() {
        let scores = parse_scores(r#"{"Astoria": "40", "Harlem": " 65.5 "}"#).expect("failed to parse");

        let astoria = scores
            .iter()
            .find(|s| s.name == "Astoria")
            .expect("missing Astoria");
        assert!((astoria.score - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_non_numeric_score() {
        assert!(parse_scores(r#"{"Harlem": "sixty-five"}"#).is_err());
        assert!(parse_scores(r#"[1, 2, 3]"#).is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite_score() {
        // These all satisfy f64::from_str but would defeat the 0-100 clamp.
        assert!(parse_scores(r#"{"Hood": "NaN"}"#).is_err());
        assert!(parse_scores(r#"{"Hood": "inf"}"#).is_err());
        assert!(parse_scores(r#"{"Hood": "-Infinity"}"#).is_err());
    }

    #[test]
    fn test_scores_clamped_to_range() {
        let scores = parse_scores(r#"{"Low": -5, "High": 140}"#).expect("failed to parse");
        for entry in scores {
            assert!((0.0..=100.0).contains(&entry.score));
        }
    }

    #[test]
    fn test_breakdown_sums_to_100() {
        validate_breakdown(&CRIME_BREAKDOWN).expect("fixed breakdown must validate");
    }

    #[test]
    fn test_breakdown_rejects_partial_pie() {
        let segments = [
            BreakdownSegment {
                crime_type: "Petty Theft",
                percentage: 60.0,
            },
            BreakdownSegment {
                crime_type: "Other",
                percentage: 30.0,
            },
        ];
        assert!(validate_breakdown(&segments).is_err());
    }

    #[test]
    fn test_comparison_bar_width() {
        // Location below average: bar is the location share of the average.
        let petty = &TOP_CRIMES_COMPARISON[0];
        assert!((petty.bar_width_percent() - (127.0 / 145.0 * 100.0)).abs() < 1e-9);
        assert!(petty.below_average());

        // Location above average: bar is full width.
        let vandalism = &TOP_CRIMES_COMPARISON[1];
        assert!((vandalism.bar_width_percent() - 100.0).abs() < f64::EPSILON);
        assert!(!vandalism.below_average());
    }
}
