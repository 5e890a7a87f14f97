use crate::domain::model::{ProfileUpdate, Review};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The data-store capability this service consumes: read a seller's reviews,
/// write the recomputed score and tier back to their profile.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn reviews_for_seller(&self, seller_id: &str) -> Result<Vec<Review>>;

    async fn update_profile(&self, seller_id: &str, update: ProfileUpdate) -> Result<()>;
}
