use crate::domain::model::{ProfileUpdate, Review};
use crate::domain::ports::ReviewStore;
use crate::utils::error::{ReputationError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};

/// PostgREST-backed store. Both operations authenticate with the service
/// role key, sent as both the `apikey` header and a bearer token.
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    service_role_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: String, service_role_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key,
        }
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/rest/v1/{}", self.base_url, table))
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
    }
}

#[async_trait]
impl ReviewStore for SupabaseStore {
    async fn reviews_for_seller(&self, seller_id: &str) -> Result<Vec<Review>> {
        tracing::debug!("Querying reviews for seller {}", seller_id);

        let filter = format!("eq.{}", seller_id);
        let response = self
            .request(Method::GET, "reviews")
            .query(&[("select", "rating"), ("seller_id", filter.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ReputationError::StoreRead {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    async fn update_profile(&self, seller_id: &str, update: ProfileUpdate) -> Result<()> {
        tracing::debug!(
            "Updating profile {} to score {} / tier {}",
            seller_id,
            update.reputation_score,
            update.seller_tier
        );

        let filter = format!("eq.{}", seller_id);
        let response = self
            .request(Method::PATCH, "profiles")
            .query(&[("id", filter.as_str())])
            .header("Prefer", "return=minimal")
            .json(&update)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ReputationError::StoreWrite {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
