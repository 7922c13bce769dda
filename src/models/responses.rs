use serde::{Deserialize, Serialize};

/// One recommended profile, hydrated with display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub age: Option<i32>,
    pub photos: Vec<String>,
    /// Combined score rescaled to a percentage, one decimal place
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub results: Vec<RecommendedProfile>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the record-interaction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionResponse {
    pub success: bool,
    #[serde(rename = "interactionId")]
    pub interaction_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
