//! NYC location catalog.
//!
//! A fixed two-level table of boroughs and their neighborhoods, used to
//! validate report locations, populate the selector panel, and answer the
//! mock score lookup. Immutable, process-wide constants.

/// Location used when the requested one is absent or unknown.
pub const DEFAULT_LOCATION: &str = "Manhattan";

/// Score assigned to locations missing from the mock score table.
pub const DEFAULT_SCORE: u32 = 70;

/// Boroughs with their neighborhoods, in selector display order.
pub const BOROUGHS: [(&str, [&str; 5]); 5] = [
    (
        "Manhattan",
        [
            "Upper East Side",
            "Harlem",
            "Chelsea",
            "Greenwich Village",
            "Midtown",
        ],
    ),
    (
        "Brooklyn",
        [
            "Williamsburg",
            "DUMBO",
            "Bay Ridge",
            "Park Slope",
            "Bedford-Stuyvesant",
        ],
    ),
    (
        "Queens",
        [
            "Astoria",
            "Long Island City",
            "Flushing",
            "Jamaica",
            "Forest Hills",
        ],
    ),
    (
        "Bronx",
        [
            "Riverdale",
            "Fordham",
            "Pelham Bay",
            "Mott Haven",
            "Concourse",
        ],
    ),
    (
        "Staten Island",
        [
            "St. George",
            "Tottenville",
            "Great Kills",
            "New Dorp",
            "West Brighton",
        ],
    ),
];

/// Mock safety scores for the report page.
const MOCK_SCORES: [(&str, u32); 8] = [
    ("Manhattan", 73),
    ("Brooklyn", 68),
    ("Queens", 71),
    ("Bronx", 62),
    ("Staten Island", 78),
    ("Upper East Side", 82),
    ("Harlem", 65),
    ("Bay Ridge", 76),
];

/// Every selectable location: the boroughs, then each borough's
/// neighborhoods in catalog order.
pub fn all_locations() -> impl Iterator<Item = &'static str> {
    BOROUGHS
        .iter()
        .map(|(borough, _)| *borough)
        .chain(BOROUGHS.iter().flat_map(|(_, hoods)| hoods.iter().copied()))
}

/// True when `location` names a borough or any neighborhood in the catalog.
#[must_use]
pub fn is_valid_location(location: &str) -> bool {
    all_locations().any(|name| name == location)
}

/// Resolve a requested location.
///
/// Absent or unknown values silently fall back to [`DEFAULT_LOCATION`];
/// known values come back as the catalog's own `'static` name.
#[must_use]
pub fn resolve_location(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|loc| all_locations().find(|name| *name == loc))
        .unwrap_or(DEFAULT_LOCATION)
}

/// Case-insensitive substring search over the flattened catalog.
///
/// An empty or whitespace-only query matches everything, so the selector
/// can reuse this for its unfiltered listing.
#[must_use]
pub fn search_locations(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    all_locations()
        .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
        .collect()
}

/// Mock safety score for a resolved location.
///
/// Locations outside the sample table get [`DEFAULT_SCORE`].
#[must_use]
pub fn mock_score(location: &str) -> u32 {
    MOCK_SCORES
        .iter()
        .find(|(name, _)| *name == location)
        .map_or(DEFAULT_SCORE, |(_, score)| *score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        // 5 boroughs plus 5 neighborhoods each.
        assert_eq!(all_locations().count(), 30);
    }

    #[test]
    fn test_every_catalog_name_is_valid() {
        for name in all_locations() {
            assert!(is_valid_location(name), "{name} should validate");
        }
    }

    #[test]
    fn test_unknown_names_are_invalid() {
        assert!(!is_valid_location("Nonexistent"));
        assert!(!is_valid_location("manhattan")); // case-sensitive membership
        assert!(!is_valid_location(""));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(resolve_location(None), "Manhattan");
        assert_eq!(resolve_location(Some("Nonexistent")), "Manhattan");
        assert_eq!(resolve_location(Some("")), "Manhattan");
    }

    #[test]
    fn test_resolve_keeps_valid_locations() {
        assert_eq!(resolve_location(Some("Bay Ridge")), "Bay Ridge");
        assert_eq!(resolve_location(Some("Staten Island")), "Staten Island");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search_locations("ridge");
        assert!(hits.contains(&"Bay Ridge"));

        let hits = search_locations("ISLAND");
        assert!(hits.contains(&"Staten Island"));
        assert!(hits.contains(&"Long Island City"));
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        assert_eq!(search_locations("").len(), 30);
        assert_eq!(search_locations("   ").len(), 30);
    }

    #[test]
    fn test_search_no_match() {
        assert!(search_locations("atlantis").is_empty());
    }

    #[test]
    fn test_mock_scores() {
        assert_eq!(mock_score("Manhattan"), 73);
        assert_eq!(mock_score("Bay Ridge"), 76);
        assert_eq!(mock_score("Upper East Side"), 82);
        // Valid catalog member without a table entry gets the default.
        assert_eq!(mock_score("Astoria"), DEFAULT_SCORE);
    }
}
