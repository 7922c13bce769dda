//! Amora Rank - Recommendation and rating service for the Amora dating app
//!
//! This library provides the candidate ranking and desirability rating core
//! used by the Amora dating app. Ranking blends TF-IDF text similarity over
//! profile attributes with Elo-style rating proximity; recorded interactions
//! feed the rating updates.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    expected_score, rating_deltas, score_percent, select_pair, Ranker, SimilarityProvider,
    TfIdfSimilarity,
};
pub use crate::models::{
    ActionKind, Interaction, Profile, RankWeights, RankedCandidate, DEFAULT_RATING,
};
