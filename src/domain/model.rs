use serde::{Deserialize, Serialize};

/// A single review as returned by the store. Reviews are created elsewhere;
/// this service only reads the rating field.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub rating: f64,
}

/// The two profile fields this service overwrites. All other profile fields
/// are left untouched by the partial update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub reputation_score: f64,
    pub seller_tier: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TierDefinition {
    pub name: &'static str,
    pub min_reviews: usize,
    pub min_rating: f64,
}

/// Seller tiers ordered highest first; the last entry is the unconditional
/// default. Fixed at compile time, never reconfigured.
pub const SELLER_TIERS: [TierDefinition; 4] = [
    TierDefinition {
        name: "Power Seller",
        min_reviews: 201,
        min_rating: 4.8,
    },
    TierDefinition {
        name: "Top Seller",
        min_reviews: 51,
        min_rating: 4.5,
    },
    TierDefinition {
        name: "Rising Star",
        min_reviews: 11,
        min_rating: 4.0,
    },
    TierDefinition {
        name: "New Seller",
        min_reviews: 0,
        min_rating: 0.0,
    },
];
