use httpmock::prelude::*;
use httpmock::Method::PATCH;
use seller_reputation::{ReputationError, ReputationUpdater, SupabaseStore};
use std::sync::Arc;

fn updater_for(server: &MockServer) -> ReputationUpdater {
    let store = SupabaseStore::new(server.base_url(), "service-role-key".to_string());
    ReputationUpdater::new(Arc::new(store))
}

fn ratings_body(ratings: &[i64]) -> serde_json::Value {
    serde_json::Value::Array(
        ratings
            .iter()
            .map(|r| serde_json::json!({ "rating": r }))
            .collect(),
    )
}

#[tokio::test]
async fn recompute_writes_rounded_score_and_tier_to_the_profile() {
    let server = MockServer::start();

    // 60 reviews averaging exactly 4.6 qualify as Top Seller.
    let mut ratings = vec![5i64; 36];
    ratings.extend(vec![4i64; 24]);

    let reviews_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/reviews")
            .query_param("select", "rating")
            .query_param("seller_id", "eq.seller-42");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ratings_body(&ratings));
    });

    let update_mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/rest/v1/profiles")
            .query_param("id", "eq.seller-42")
            .json_body(serde_json::json!({
                "reputation_score": 4.6,
                "seller_tier": "Top Seller"
            }));
        then.status(204);
    });

    let tier = updater_for(&server).handle("seller-42").await.unwrap();

    reviews_mock.assert();
    update_mock.assert();
    assert_eq!(tier, "Top Seller");
}

#[tokio::test]
async fn seller_without_reviews_is_reset_to_new_seller() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/reviews");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let update_mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/rest/v1/profiles")
            .json_body(serde_json::json!({
                "reputation_score": 0.0,
                "seller_tier": "New Seller"
            }));
        then.status(204);
    });

    let tier = updater_for(&server).handle("seller-7").await.unwrap();

    update_mock.assert();
    assert_eq!(tier, "New Seller");
}

#[tokio::test]
async fn rerunning_with_an_unchanged_review_set_repeats_the_same_write() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/reviews");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ratings_body(&[5, 4, 4, 5, 3]));
    });

    let update_mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/rest/v1/profiles")
            .json_body(serde_json::json!({
                "reputation_score": 4.2,
                "seller_tier": "New Seller"
            }));
        then.status(204);
    });

    let updater = updater_for(&server);
    updater.handle("seller-7").await.unwrap();
    updater.handle("seller-7").await.unwrap();

    // Both invocations must match the identical payload.
    update_mock.assert_hits(2);
}

#[tokio::test]
async fn failed_review_query_aborts_before_the_profile_write() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/reviews");
        then.status(503).body("connection refused");
    });

    let update_mock = server.mock(|when, then| {
        when.method(PATCH).path("/rest/v1/profiles");
        then.status(204);
    });

    let err = updater_for(&server).handle("seller-9").await.unwrap_err();

    assert!(matches!(err, ReputationError::StoreRead { status: 503, .. }));
    update_mock.assert_hits(0);
}
