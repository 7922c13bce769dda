use crate::core::proximity::rating_proximity;
use crate::core::similarity::{SimilarityProvider, TfIdfSimilarity};
use crate::models::{Profile, RankWeights, RankedCandidate};

/// Result of one ranking pass
#[derive(Debug)]
pub struct RankOutcome {
    pub ranked: Vec<RankedCandidate>,
    pub total_candidates: usize,
}

/// Combines text similarity and rating proximity into one ranked list.
///
/// # Pipeline
/// 1. Similarity scores from the injected provider
/// 2. Batch-relative rating proximity
/// 3. Weighted blend, sort, truncate
#[derive(Debug, Clone)]
pub struct Ranker<S> {
    provider: S,
    weights: RankWeights,
}

impl<S: SimilarityProvider> Ranker<S> {
    pub fn new(provider: S, weights: RankWeights) -> Self {
        Self { provider, weights }
    }

    /// Rank candidates for a target profile.
    ///
    /// Returns up to `limit` (profile id, combined score) pairs, descending
    /// by score. The combined score is a convex combination of two values
    /// in [0, 1], so it stays in [0, 1]. Ties break on ascending profile id
    /// to keep results reproducible. An empty candidate pool is a normal
    /// outcome, not an error.
    pub fn rank(&self, target: &Profile, candidates: &[Profile], limit: usize) -> RankOutcome {
        let total_candidates = candidates.len();
        if candidates.is_empty() {
            return RankOutcome {
                ranked: Vec::new(),
                total_candidates,
            };
        }

        let texts: Vec<String> = candidates.iter().map(Profile::text_features).collect();
        let similarity = self.provider.similarities(&target.text_features(), &texts);

        let ratings: Vec<i32> = candidates.iter().map(Profile::rating).collect();
        let proximity = rating_proximity(target.rating(), &ratings);

        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .zip(similarity.iter().zip(proximity.iter()))
            .map(|(profile, (sim, prox))| RankedCandidate {
                profile_id: profile.id.clone(),
                score: self.weights.similarity * sim + self.weights.rating * prox,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.profile_id.cmp(&b.profile_id))
        });

        ranked.truncate(limit);

        RankOutcome {
            ranked,
            total_candidates,
        }
    }
}

impl Ranker<TfIdfSimilarity> {
    pub fn with_defaults() -> Self {
        Self::new(TfIdfSimilarity::new(), RankWeights::default())
    }
}

impl Default for Ranker<TfIdfSimilarity> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Rescale a combined score in [0, 1] to a percentage with one decimal
#[inline]
pub fn score_percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, bio: &str, rating: i32) -> Profile {
        Profile {
            id: id.to_string(),
            display_name: Some(format!("User {}", id)),
            age: Some(27),
            location: None,
            bio: Some(bio.to_string()),
            occupation: None,
            education: None,
            interests: vec![],
            photos: vec![],
            onboarding_completed: true,
            rating: Some(rating),
        }
    }

    #[test]
    fn test_similar_text_and_close_rating_wins() {
        let ranker = Ranker::with_defaults();
        let target = candidate("t", "hiking climbing mountains", 1200);

        let candidates = vec![
            candidate("1", "hiking climbing mountains", 1200),
            candidate("2", "poker videogames anime", 1900),
        ];

        let outcome = ranker.rank(&target, &candidates, 10);

        assert_eq!(outcome.ranked.len(), 2);
        assert_eq!(outcome.ranked[0].profile_id, "1");
        assert!(outcome.ranked[0].score > outcome.ranked[1].score);
    }

    #[test]
    fn test_sorted_descending_with_scores_in_range() {
        let ranker = Ranker::with_defaults();
        let target = candidate("t", "music travel cooking", 1250);

        let candidates = vec![
            candidate("1", "music festivals", 1300),
            candidate("2", "travel photography cooking", 1240),
            candidate("3", "chess go", 900),
            candidate("4", "", 1250),
        ];

        let outcome = ranker.rank(&target, &candidates, 10);

        for entry in &outcome.ranked {
            assert!((0.0..=1.0).contains(&entry.score), "Score {} out of range", entry.score);
        }
        for pair in outcome.ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score, "Not sorted descending");
        }
    }

    #[test]
    fn test_ties_break_on_ascending_id() {
        let ranker = Ranker::with_defaults();
        // No extractable text anywhere: similarity falls back to 0.5 and
        // identical ratings make proximity 1.0, so all scores tie exactly.
        let target = candidate("t", "", 1200);
        let candidates = vec![
            candidate("c", "", 1200),
            candidate("a", "", 1200),
            candidate("b", "", 1200),
        ];

        let outcome = ranker.rank(&target, &candidates, 10);

        let ids: Vec<&str> = outcome.ranked.iter().map(|r| r.profile_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_respects_limit() {
        let ranker = Ranker::with_defaults();
        let target = candidate("t", "reading", 1200);

        let candidates: Vec<Profile> = (0..30)
            .map(|i| candidate(&format!("{:02}", i), "reading novels", 1100 + i * 10))
            .collect();

        let outcome = ranker.rank(&target, &candidates, 5);

        assert_eq!(outcome.ranked.len(), 5);
        assert_eq!(outcome.total_candidates, 30);
    }

    #[test]
    fn test_empty_pool_is_a_normal_outcome() {
        let ranker = Ranker::with_defaults();
        let target = candidate("t", "reading", 1200);

        let outcome = ranker.rank(&target, &[], 20);

        assert!(outcome.ranked.is_empty());
        assert_eq!(outcome.total_candidates, 0);
    }

    #[test]
    fn test_score_percent_rounding() {
        assert_eq!(score_percent(0.5), 50.0);
        assert_eq!(score_percent(0.12345), 12.3);
        assert_eq!(score_percent(0.9996), 100.0);
        assert_eq!(score_percent(0.0), 0.0);
    }
}
