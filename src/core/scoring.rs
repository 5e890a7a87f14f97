use crate::domain::model::SELLER_TIERS;

/// Arithmetic mean of the ratings, rounded to 2 decimal places. An empty
/// review set scores 0. Ratings are summed as-is; the store is trusted to
/// hold them in range.
pub fn average_rating(ratings: &[f64]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let total: f64 = ratings.iter().sum();
    round2(total / ratings.len() as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// First tier (highest first) whose both thresholds are satisfied; the final
/// entry always matches. Boundaries are inclusive, and the caller passes the
/// already-rounded average.
pub fn determine_tier(review_count: usize, avg_rating: f64) -> &'static str {
    for tier in &SELLER_TIERS[..SELLER_TIERS.len() - 1] {
        if review_count >= tier.min_reviews && avg_rating >= tier.min_rating {
            return tier.name;
        }
    }
    SELLER_TIERS[SELLER_TIERS.len() - 1].name
}
