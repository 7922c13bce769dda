use serde::{Deserialize, Serialize};

/// Rating assigned to new profiles and assumed for rows where the stored
/// value is missing.
pub const DEFAULT_RATING: i32 = 1200;

/// User profile with free-text attributes and the desirability rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "userId")]
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(rename = "onboardingCompleted", default)]
    pub onboarding_completed: bool,
    #[serde(default)]
    pub rating: Option<i32>,
}

impl Profile {
    /// Helper to get the rating as an i32, defaulting to 1200
    pub fn rating(&self) -> i32 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    /// Helper to get the age as an i32, defaulting to 0 for scoring
    pub fn age_or_default(&self) -> i32 {
        self.age.unwrap_or(0)
    }

    /// Concatenated free-text attributes fed to the similarity engine:
    /// biography, occupation, education and space-joined interest tags.
    pub fn text_features(&self) -> String {
        format!(
            "{} {} {} {}",
            self.bio.as_deref().unwrap_or(""),
            self.occupation.as_deref().unwrap_or(""),
            self.education.as_deref().unwrap_or(""),
            self.interests.join(" "),
        )
    }
}

/// Interaction kinds recorded by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionKind {
    Like,
    Superlike,
    Pass,
}

impl ActionKind {
    /// Parse a client-supplied action string, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "LIKE" => Some(Self::Like),
            "SUPERLIKE" => Some(Self::Superlike),
            "PASS" => Some(Self::Pass),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Superlike => "SUPERLIKE",
            Self::Pass => "PASS",
        }
    }
}

/// Immutable record of a swipe decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    #[serde(rename = "actorId")]
    pub actor_id: String,
    #[serde(rename = "targetId")]
    pub target_id: String,
    pub action: ActionKind,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One entry of a ranking result: profile id plus combined score in [0, 1].
/// Transient, recomputed every request.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub profile_id: String,
    pub score: f64,
}

/// Blend weights for the combined score
#[derive(Debug, Clone, Copy)]
pub struct RankWeights {
    pub similarity: f64,
    pub rating: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            similarity: 0.7,
            rating: 0.3,
        }
    }
}
