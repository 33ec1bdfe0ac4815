//! Subscription expiry sweep action

use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use tracing::{error, info};

use crate::domains::subscriptions::models::Subscription;

/// Outcome of one subscription expiry sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionSweepOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubscriptionSweepOutcome {
    pub fn ok(expired_count: u64) -> Self {
        Self {
            success: true,
            expired_count: Some(expired_count),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            expired_count: None,
            error: Some(error.into()),
        }
    }
}

/// Run one expiry sweep over all subscriptions.
///
/// Flips every active subscription past its end date to expired. Errors
/// are folded into the outcome, never propagated; the trigger that called
/// this decides the HTTP status from `success`.
pub async fn expire_old_subscriptions(pool: &PgPool) -> SubscriptionSweepOutcome {
    let as_of = Utc::now();

    match Subscription::sweep_expired(as_of, pool).await {
        Ok(count) => {
            info!(expired_count = count, "Subscription sweep complete");
            SubscriptionSweepOutcome::ok(count)
        }
        Err(e) => {
            error!(error = %e, "Subscription sweep failed");
            SubscriptionSweepOutcome::failed(e.to_string())
        }
    }
}
