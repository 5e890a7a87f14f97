use crate::core::scoring::{average_rating, determine_tier};
use crate::domain::model::ProfileUpdate;
use crate::domain::ports::ReviewStore;
use crate::utils::error::{ReputationError, Result};
use std::sync::Arc;

/// The single operation of this service: read a seller's reviews, recompute
/// the score and tier, write both back to the profile. Each invocation is
/// independent and idempotent for an unchanged review set.
#[derive(Clone)]
pub struct ReputationUpdater {
    store: Arc<dyn ReviewStore>,
}

impl ReputationUpdater {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Returns the newly assigned tier name. Store failures propagate
    /// untouched; a missing seller id fails before any store call.
    pub async fn handle(&self, seller_id: &str) -> Result<&'static str> {
        if seller_id.is_empty() {
            return Err(ReputationError::MissingSellerId);
        }

        let reviews = self.store.reviews_for_seller(seller_id).await?;

        let review_count = reviews.len();
        let ratings: Vec<f64> = reviews.iter().map(|review| review.rating).collect();
        let avg_rating = average_rating(&ratings);
        let new_tier = determine_tier(review_count, avg_rating);

        tracing::debug!(
            "Seller {}: {} reviews, avg {} -> {}",
            seller_id,
            review_count,
            avg_rating,
            new_tier
        );

        self.store
            .update_profile(
                seller_id,
                ProfileUpdate {
                    reputation_score: avg_rating,
                    seller_tier: new_tier,
                },
            )
            .await?;

        Ok(new_tier)
    }
}
