//! Subscription dashboard routes.

use axum::{
    extract::{Extension, Path},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::domains::subscriptions::models::Subscription;
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct SubscriptionView {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub status: String,
    pub end_date: DateTime<Utc>,
}

impl From<Subscription> for SubscriptionView {
    fn from(subscription: Subscription) -> Self {
        Self {
            id: subscription.id,
            plan_id: subscription.plan_id,
            status: subscription.status,
            end_date: subscription.end_date,
        }
    }
}

/// Current subscription for a user.
///
/// `null` means the user never subscribed - a valid state, not an error.
/// Backend failures also degrade to `null` (logged) so the account page
/// still renders.
pub async fn user_subscription_handler(
    Extension(state): Extension<AppState>,
    Path(user_id): Path<Uuid>,
) -> Json<Option<SubscriptionView>> {
    match Subscription::find_for_user(user_id, &state.db_pool).await {
        Ok(subscription) => Json(subscription.map(Into::into)),
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Subscription lookup failed");
            Json(None)
        }
    }
}
