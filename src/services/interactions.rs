use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::elo::select_pair;
use crate::models::{ActionKind, Interaction};
use crate::services::ratings::{RatingChange, RatingEngine};
use crate::services::store::{ProfileStore, StoreError};

/// An interaction that has been persisted, with the rating change it caused
#[derive(Debug, Clone)]
pub struct RecordedInteraction {
    pub interaction: Interaction,
    pub change: RatingChange,
}

/// Records swipe decisions and triggers the paired rating update.
///
/// The interaction row and the rating writes are separate persistence
/// operations; a crash between them leaves the audit entry without its
/// rating effect. Narrow window, accepted.
pub struct InteractionRecorder {
    store: Arc<ProfileStore>,
    ratings: RatingEngine,
    last_timestamp: Mutex<DateTime<Utc>>,
}

impl InteractionRecorder {
    pub fn new(store: Arc<ProfileStore>, ratings: RatingEngine) -> Self {
        Self {
            store,
            ratings,
            last_timestamp: Mutex::new(DateTime::<Utc>::MIN_UTC),
        }
    }

    /// Validate, persist the interaction, then update both ratings.
    ///
    /// The (gainer, loser) pair handed to the rating engine follows the
    /// action kind: likes and superlikes reward the target, passes reward
    /// the actor.
    pub async fn record(
        &self,
        actor_id: &str,
        target_id: &str,
        action: ActionKind,
    ) -> Result<RecordedInteraction, StoreError> {
        if actor_id.is_empty() || target_id.is_empty() {
            return Err(StoreError::InvalidInput(
                "actor and target ids must be non-empty".to_string(),
            ));
        }

        let interaction = Interaction {
            id: Uuid::new_v4().to_string(),
            actor_id: actor_id.to_string(),
            target_id: target_id.to_string(),
            action,
            created_at: self.next_timestamp(),
        };

        self.store.append_interaction(&interaction).await?;

        let (gainer_id, loser_id) = select_pair(action, actor_id, target_id);
        let change = self.ratings.apply_outcome(gainer_id, loser_id).await?;

        Ok(RecordedInteraction { interaction, change })
    }

    /// Timestamps never run backwards within one recorder, even if the
    /// system clock does.
    fn next_timestamp(&self) -> DateTime<Utc> {
        let mut last = self
            .last_timestamp
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let now = Utc::now();
        let stamped = if now > *last { now } else { *last };
        *last = stamped;
        stamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder_without_db() -> InteractionRecorder {
        // Lazy pool: never connects unless a query runs, and these tests
        // only exercise timestamp assignment
        let pool = sqlx::PgPool::connect_lazy("postgres://localhost/unused").expect("lazy pool");
        let store = Arc::new(ProfileStore::from_pool(pool));
        InteractionRecorder::new(store.clone(), RatingEngine::new(store))
    }

    #[tokio::test]
    async fn test_timestamps_are_monotonic() {
        let recorder = recorder_without_db();

        let mut previous = recorder.next_timestamp();
        for _ in 0..100 {
            let next = recorder.next_timestamp();
            assert!(next >= previous);
            previous = next;
        }
    }
}
