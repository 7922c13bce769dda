// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ActionKind, Interaction, Profile, RankWeights, RankedCandidate, DEFAULT_RATING};
pub use requests::{InteractionRequest, RecommendationsRequest};
pub use responses::{
    ErrorResponse, HealthResponse, InteractionResponse, RecommendationsResponse, RecommendedProfile,
};
