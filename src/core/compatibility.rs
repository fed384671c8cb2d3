use crate::models::{CompatibilityWeights, UserProfile};

/// Compatibility heuristic between two rider profiles.
///
/// Starts at zero and awards points per shared attribute: location,
/// typical driving times, major, extracurriculars. An empty attribute is
/// treated as unknown and never matches, not even another empty one.
pub fn compatibility_score(
    reference: &UserProfile,
    candidate: &UserProfile,
    weights: &CompatibilityWeights,
) -> i64 {
    let mut score = 0;

    if attributes_match(&reference.location, &candidate.location) {
        score += weights.location;
    }
    if attributes_match(
        &reference.typical_driving_times,
        &candidate.typical_driving_times,
    ) {
        score += weights.driving_times;
    }
    if attributes_match(&reference.major, &candidate.major) {
        score += weights.major;
    }
    if attributes_match(&reference.extracurriculars, &candidate.extracurriculars) {
        score += weights.extracurriculars;
    }

    score
}

#[inline]
fn attributes_match(reference: &str, candidate: &str) -> bool {
    !reference.is_empty() && reference == candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_profile(id: i64, location: &str, times: &str, major: &str, extras: &str) -> UserProfile {
        UserProfile {
            id,
            name: format!("User {}", id),
            bio: String::new(),
            location: location.to_string(),
            typical_driving_times: times.to_string(),
            contact_info: String::new(),
            parking_pass: String::new(),
            major: major.to_string(),
            extracurriculars: extras.to_string(),
        }
    }

    #[test]
    fn test_full_overlap_scores_eight() {
        let a = create_profile(1, "North", "Morning", "Chemistry", "Band");
        let b = create_profile(2, "North", "Morning", "Chemistry", "Band");

        let score = compatibility_score(&a, &b, &CompatibilityWeights::default());

        assert_eq!(score, 8);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let a = create_profile(1, "North", "Morning", "Chemistry", "Band");
        let b = create_profile(2, "South", "Evening", "History", "");

        let score = compatibility_score(&a, &b, &CompatibilityWeights::default());

        assert_eq!(score, 0);
    }

    #[test]
    fn test_empty_attributes_never_match() {
        // Both profiles blank everywhere: "unknown" is not "matching empty"
        let a = create_profile(1, "", "", "", "");
        let b = create_profile(2, "", "", "", "");

        let score = compatibility_score(&a, &b, &CompatibilityWeights::default());

        assert_eq!(score, 0);
    }

    #[test]
    fn test_score_is_commutative() {
        let a = create_profile(1, "North", "Morning", "Biology", "Tennis");
        let b = create_profile(2, "North", "Evening", "Biology", "");
        let weights = CompatibilityWeights::default();

        assert_eq!(
            compatibility_score(&a, &b, &weights),
            compatibility_score(&b, &a, &weights)
        );
    }

    #[test]
    fn test_partial_overlap() {
        let a = create_profile(1, "North", "Morning", "Chemistry", "Band");
        let b = create_profile(2, "North", "Evening", "Chemistry", "Chess");

        // location (3) + major (2)
        let score = compatibility_score(&a, &b, &CompatibilityWeights::default());

        assert_eq!(score, 5);
    }
}
