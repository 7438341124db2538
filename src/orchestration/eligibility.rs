//! # Eligibility Matcher
//!
//! Narrows all boosters down to available, location-compatible replacement
//! candidates. Location data is free text with inconsistent granularity
//! (city vs. neighborhood), so matching is an intentionally permissive
//! case-insensitive substring check in either direction.

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::models::Booster;

/// Derive the location hint for matching: the releasing booster's own
/// location when present, otherwise the first comma-delimited token of the
/// booking's free-text location (typically the city).
pub fn location_hint(booster_location: Option<&str>, booking_location: &str) -> Option<String> {
    if let Some(location) = booster_location {
        let trimmed = location.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }

    booking_location
        .split(',')
        .next()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Case-insensitive substring match in either direction. Empty strings never
/// match; "København" matches both "København NV" and "køben".
pub fn location_matches(hint: &str, candidate_location: Option<&str>) -> bool {
    let Some(candidate) = candidate_location else {
        return false;
    };

    let hint = hint.trim().to_lowercase();
    let candidate = candidate.trim().to_lowercase();
    if hint.is_empty() || candidate.is_empty() {
        return false;
    }

    candidate.contains(&hint) || hint.contains(&candidate)
}

/// Available boosters, excluding the releasing one, whose location is
/// compatible with the hint. No hint means no candidates, which is not an
/// error: the workflow proceeds and simply notifies nobody.
pub async fn find_eligible_boosters(
    pool: &PgPool,
    exclude_booster_id: Uuid,
    hint: Option<&str>,
) -> Result<Vec<Booster>, sqlx::Error> {
    let Some(hint) = hint else {
        debug!(
            exclude_booster_id = %exclude_booster_id,
            "no location hint derivable, match set is empty"
        );
        return Ok(Vec::new());
    };

    let available = Booster::list_available_excluding(pool, exclude_booster_id).await?;
    let candidates: Vec<Booster> = available
        .into_iter()
        .filter(|booster| location_matches(hint, booster.location.as_deref()))
        .collect();

    debug!(
        hint = hint,
        candidate_count = candidates.len(),
        "eligibility matching complete"
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_prefers_booster_location() {
        let hint = location_hint(Some("Frederiksberg"), "København, Danmark");
        assert_eq!(hint.as_deref(), Some("Frederiksberg"));
    }

    #[test]
    fn hint_falls_back_to_first_booking_token() {
        let hint = location_hint(None, "København NV, Danmark");
        assert_eq!(hint.as_deref(), Some("København NV"));

        let hint = location_hint(Some("   "), "Aarhus C");
        assert_eq!(hint.as_deref(), Some("Aarhus C"));
    }

    #[test]
    fn no_hint_when_everything_is_blank() {
        assert_eq!(location_hint(None, ""), None);
        assert_eq!(location_hint(None, "  ,  Danmark"), None);
    }

    #[test]
    fn matching_is_case_insensitive_and_bidirectional() {
        assert!(location_matches("København", Some("københavn nv")));
        assert!(location_matches("København NV", Some("København")));
        assert!(location_matches("KØBENHAVN", Some("københavn")));
        assert!(!location_matches("København", Some("Aarhus")));
    }

    #[test]
    fn blank_locations_never_match() {
        assert!(!location_matches("København", None));
        assert!(!location_matches("København", Some("   ")));
        assert!(!location_matches("", Some("København")));
    }
}
