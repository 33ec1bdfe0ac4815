use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Subscription statuses as stored in the database.
pub mod status {
    pub const ACTIVE: &str = "active";
    pub const EXPIRED: &str = "expired";
    pub const CANCELLED: &str = "cancelled";
}

/// Subscription model - SQL persistence layer
///
/// A subscription grants paid access until `end_date`. Rows keep the
/// `active` status until the sweep flips them, so "active but past
/// end_date" is a transient state resolved eventually, not instantaneously.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan_id: Uuid,
    pub status: String,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Create an active subscription ending at `end_date`.
    pub async fn create(
        user_id: Uuid,
        plan_id: Uuid,
        end_date: DateTime<Utc>,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO subscriptions (user_id, plan_id, status, end_date)
             VALUES ($1, $2, 'active', $3)
             RETURNING *",
        )
        .bind(user_id)
        .bind(plan_id)
        .bind(end_date)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find subscription by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM subscriptions WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Latest subscription for a user, if any.
    ///
    /// `None` is the normal case for users who never subscribed.
    pub async fn find_for_user(user_id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM subscriptions WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Flip every active subscription whose `end_date` elapsed on or before
    /// `as_of` to expired. Returns the rows flipped by this call.
    ///
    /// The `status = 'active'` precondition keeps repeat sweeps from
    /// touching a row twice; cancelled rows are never considered.
    pub async fn sweep_expired(as_of: DateTime<Utc>, pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE subscriptions SET status = 'expired' WHERE status = 'active' AND end_date <= $1",
        )
        .bind(as_of)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
