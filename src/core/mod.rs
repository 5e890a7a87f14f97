pub mod scoring;
pub mod updater;

pub use crate::domain::model::{ProfileUpdate, Review, TierDefinition, SELLER_TIERS};
pub use crate::domain::ports::ReviewStore;
pub use crate::utils::error::Result;
