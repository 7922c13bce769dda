// Core algorithm exports
pub mod elo;
pub mod proximity;
pub mod ranker;
pub mod similarity;

pub use elo::{expected_score, rating_deltas, select_pair, K_FACTOR};
pub use proximity::rating_proximity;
pub use ranker::{score_percent, RankOutcome, Ranker};
pub use similarity::{SimilarityProvider, TfIdfSimilarity, FALLBACK_SIMILARITY};
