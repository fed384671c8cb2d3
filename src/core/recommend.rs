use crate::core::compatibility::compatibility_score;
use crate::models::{CompatibilityWeights, ScoredCandidate, UserProfile};

/// Ranks rideshare candidates for a reference rider.
///
/// Scores every other profile with the compatibility heuristic and
/// orders the result best-first.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: CompatibilityWeights,
}

impl Recommender {
    pub fn new(weights: CompatibilityWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: CompatibilityWeights::default(),
        }
    }

    /// Score and order candidates for `reference`.
    ///
    /// The reference profile itself is excluded. `limit`, when given,
    /// truncates the ranking after sorting.
    pub fn rank(
        &self,
        reference: &UserProfile,
        candidates: Vec<UserProfile>,
        limit: Option<usize>,
    ) -> Vec<ScoredCandidate> {
        let mut ranked: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|candidate| candidate.id != reference.id)
            .map(|candidate| {
                let score = compatibility_score(reference, &candidate, &self.weights);
                ScoredCandidate {
                    user: candidate,
                    score,
                }
            })
            .collect();

        // sort_by is stable: equal scores keep their insertion (id) order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        if let Some(limit) = limit {
            ranked.truncate(limit);
        }

        ranked
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
