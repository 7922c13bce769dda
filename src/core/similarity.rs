use std::collections::{HashMap, HashSet};

/// Similarity reported for every candidate when no text features are
/// extractable from any profile in the batch. Keeps ranking alive on
/// rating proximity alone instead of erroring out.
pub const FALLBACK_SIMILARITY: f64 = 0.5;

/// English stop-words excluded from the vocabulary
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "could", "did", "do", "does", "doing",
    "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i",
    "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "out", "over", "own", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "you", "your",
];

/// Capability for scoring candidate texts against a target text.
///
/// The ranker depends only on this contract, so the TF-IDF engine below can
/// be swapped for any text-embedding approach without touching the ranking
/// pipeline.
pub trait SimilarityProvider {
    /// Score each candidate text against the target text.
    ///
    /// Returns one score in [0, 1] per candidate, in input order. An empty
    /// candidate batch yields an empty vector.
    fn similarities(&self, target: &str, candidates: &[String]) -> Vec<f64>;
}

/// TF-IDF vectorizer with cosine scoring.
///
/// The term-weighting model is rebuilt from scratch on every call over the
/// candidate texts plus the target text. That bounds memory and keeps
/// results always fresh at the cost of re-paying vectorization per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfSimilarity;

impl TfIdfSimilarity {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityProvider for TfIdfSimilarity {
    fn similarities(&self, target: &str, candidates: &[String]) -> Vec<f64> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut docs: Vec<Vec<String>> = candidates.iter().map(|text| tokenize(text)).collect();
        docs.push(tokenize(target));

        match build_vectors(&docs) {
            Some(vectors) => {
                let target_vector = &vectors[vectors.len() - 1];
                vectors[..candidates.len()]
                    .iter()
                    .map(|candidate_vector| cosine(target_vector, candidate_vector))
                    .collect()
            }
            // Empty vocabulary: every text reduced to nothing after
            // stop-word removal. Uniform fallback, documented policy.
            None => vec![FALLBACK_SIMILARITY; candidates.len()],
        }
    }
}

/// Lowercase, split on non-alphanumerics, drop stop-words and single chars
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 2 && !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Build one L2-normalized TF-IDF vector per document.
///
/// Uses smoothed inverse document frequency, ln((1 + n) / (1 + df)) + 1, so
/// no term weight is ever zero or negative. Returns None when the corpus
/// has no terms at all.
fn build_vectors(docs: &[Vec<String>]) -> Option<Vec<HashMap<String, f64>>> {
    let n_docs = docs.len() as f64;

    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for doc in docs {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }

    if document_frequency.is_empty() {
        return None;
    }

    let vectors = docs
        .iter()
        .map(|doc| {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for term in doc {
                *counts.entry(term).or_insert(0) += 1;
            }

            let mut vector: HashMap<String, f64> = counts
                .into_iter()
                .map(|(term, count)| {
                    let idf =
                        ((1.0 + n_docs) / (1.0 + document_frequency[term] as f64)).ln() + 1.0;
                    (term.to_string(), count as f64 * idf)
                })
                .collect();

            let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for weight in vector.values_mut() {
                    *weight /= norm;
                }
            }
            vector
        })
        .collect();

    Some(vectors)
}

/// Cosine similarity of two L2-normalized sparse vectors.
///
/// Reduces to a dot product over the smaller vector's terms. All weights
/// are non-negative, so the result lies in [0, 1]; an all-zero vector on
/// either side scores 0.
fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, weight)| large.get(term).map(|other| weight * other))
        .sum();

    dot.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn similarities(target: &str, candidates: &[&str]) -> Vec<f64> {
        let candidates: Vec<String> = candidates.iter().map(|s| s.to_string()).collect();
        TfIdfSimilarity::new().similarities(target, &candidates)
    }

    #[test]
    fn test_identical_text_scores_highest() {
        let scores = similarities(
            "hiking climbing photography",
            &["hiking climbing photography", "poker videogames anime"],
        );

        assert!(scores[0] > 0.99, "Identical text should score ~1, got {}", scores[0]);
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn test_disjoint_text_scores_zero() {
        let scores = similarities("hiking climbing", &["poker videogames"]);
        assert!(scores[0] < 1e-9, "Disjoint vocabularies should score 0, got {}", scores[0]);
    }

    #[test]
    fn test_scores_within_unit_interval() {
        let scores = similarities(
            "music concerts festivals travel",
            &[
                "music festivals",
                "travel photography music",
                "cooking baking",
                "",
            ],
        );

        for score in scores {
            assert!((0.0..=1.0).contains(&score), "Score {} out of [0, 1]", score);
        }
    }

    #[test]
    fn test_empty_corpus_returns_empty_vector() {
        let scores = TfIdfSimilarity::new().similarities("anything", &[]);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_empty_vocabulary_falls_back_uniformly() {
        // Stop-words and single characters only, nothing survives tokenization
        let scores = similarities("the a of", &["to and", "", "i"]);
        assert_eq!(scores, vec![FALLBACK_SIMILARITY; 3]);
    }

    #[test]
    fn test_empty_target_scores_zero_against_real_candidates() {
        let scores = similarities("", &["hiking climbing"]);
        assert_eq!(scores, vec![0.0]);
    }

    #[test]
    fn test_tokenize_drops_stop_words_and_short_tokens() {
        let tokens = tokenize("The quick brown fox, a 1 X!");
        assert_eq!(tokens, vec!["quick", "brown", "fox"]);
    }
}
