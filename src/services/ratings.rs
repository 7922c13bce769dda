use std::sync::Arc;

use crate::core::elo::rating_deltas;
use crate::services::store::{ProfileStore, StoreError};

/// Post-update ratings for both parties of an interaction
#[derive(Debug, Clone, Copy)]
pub struct RatingChange {
    pub gainer_rating: i32,
    pub loser_rating: i32,
}

/// Applies Elo outcomes to the two parties of an interaction.
///
/// The single mutation entry point for the rating attribute: ranking reads
/// it, only this engine writes it.
pub struct RatingEngine {
    store: Arc<ProfileStore>,
}

impl RatingEngine {
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self { store }
    }

    /// Rate one pairwise outcome and persist both sides.
    ///
    /// Both profiles are resolved before any write is issued; a missing id
    /// aborts the whole update with NotFound and neither rating moves. The
    /// two writes land in a single store transaction.
    pub async fn apply_outcome(
        &self,
        gainer_id: &str,
        loser_id: &str,
    ) -> Result<RatingChange, StoreError> {
        let (gainer_rating, loser_rating) =
            self.store.fetch_rating_pair(gainer_id, loser_id).await?;

        let (gain, loss) = rating_deltas(gainer_rating, loser_rating);

        let (new_gainer, new_loser) = self
            .store
            .apply_rating_deltas(gainer_id, gain, loser_id, loss)
            .await?;

        tracing::debug!(
            "Rating update: {} {} -> {}, {} {} -> {}",
            gainer_id,
            gainer_rating,
            new_gainer,
            loser_id,
            loser_rating,
            new_loser
        );

        Ok(RatingChange {
            gainer_rating: new_gainer,
            loser_rating: new_loser,
        })
    }
}
