//! Scheduled trigger endpoints.
//!
//! External schedulers hit these on a cadence; the same sweeps also run on
//! the in-process scheduler. When a cron secret is configured the caller
//! must present it as a bearer token.

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domains::listings::actions::process_expirations;
use crate::domains::listings::models::{ExpirationResult, ExpiringListing};
use crate::domains::subscriptions::actions::{expire_old_subscriptions, SubscriptionSweepOutcome};
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct SweepResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiring_jobs: Option<Vec<ExpiringListing>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SweepResponse {
    fn failed(error: &str) -> Self {
        Self {
            success: false,
            expired_count: None,
            expiring_jobs: None,
            processed_at: None,
            error: Some(error.to_string()),
        }
    }
}

impl From<ExpirationResult> for SweepResponse {
    fn from(result: ExpirationResult) -> Self {
        Self {
            success: true,
            expired_count: Some(result.expired_count),
            expiring_jobs: Some(result.expiring_jobs),
            processed_at: Some(result.processed_at),
            error: None,
        }
    }
}

/// Check the bearer shared secret, if one is configured.
fn authorized(secret: Option<&str>, headers: &HeaderMap) -> bool {
    let Some(expected) = secret else {
        return true;
    };

    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == expected)
}

/// Trigger the listing expiration sweep.
pub async fn expire_listings_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> (StatusCode, Json<SweepResponse>) {
    if !authorized(state.cron_secret.as_deref(), &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(SweepResponse::failed("unauthorized")),
        );
    }

    match process_expirations(&state.db_pool, state.sweep_notice_days).await {
        Some(result) => (StatusCode::OK, Json(result.into())),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SweepResponse::failed("Expiration sweep failed")),
        ),
    }
}

/// Trigger the subscription expiry sweep.
pub async fn expire_subscriptions_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> (StatusCode, Json<SubscriptionSweepOutcome>) {
    if !authorized(state.cron_secret.as_deref(), &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(SubscriptionSweepOutcome::failed("unauthorized")),
        );
    }

    let outcome = expire_old_subscriptions(&state.db_pool).await;
    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(outcome))
}
