use crate::core::updater::ReputationUpdater;
use crate::utils::error::ReputationError;
use axum::{
    extract::Extension,
    http::{header::HeaderName, HeaderValue, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

// Applied to every response, success or failure, preflight included.
const CORS_HEADERS: [(&str, &str); 2] = [
    ("access-control-allow-origin", "*"),
    (
        "access-control-allow-headers",
        "authorization, x-client-info, apikey, content-type",
    ),
];

/// Webhook payload: the triggering row change, of which only the seller id
/// is used.
#[derive(Debug, Deserialize)]
struct TriggerPayload {
    #[serde(default)]
    record: TriggerRecord,
}

#[derive(Debug, Default, Deserialize)]
struct TriggerRecord {
    #[serde(default)]
    seller_id: String,
}

// Error wrapper for consistent JSON error responses. Every error kind maps
// to 400 with the same shape; the variants stay distinguishable here if
// per-kind status codes are ever wanted.
struct AppError(ReputationError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Error updating reputation: {}", self.0);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

impl From<ReputationError> for AppError {
    fn from(err: ReputationError) -> Self {
        Self(err)
    }
}

pub fn router(updater: ReputationUpdater) -> Router {
    let routes = post(update_reputation_handler).options(preflight_handler);

    Router::new()
        .route("/", routes.clone())
        .route("/update-reputation", routes)
        .layer(middleware::from_fn(apply_cors))
        .layer(Extension(updater))
}

async fn update_reputation_handler(
    Extension(updater): Extension<ReputationUpdater>,
    Json(payload): Json<TriggerPayload>,
) -> Result<impl IntoResponse, AppError> {
    let new_tier = updater.handle(&payload.record.seller_id).await?;
    Ok(Json(json!({ "success": true, "newTier": new_tier })))
}

// Preflight gets a fixed acknowledgement, no computation.
async fn preflight_handler() -> &'static str {
    "ok"
}

async fn apply_cors<B>(request: Request<B>, next: Next<B>) -> Response {
    let mut response = next.run(request).await;
    for (name, value) in CORS_HEADERS {
        response.headers_mut().insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}
