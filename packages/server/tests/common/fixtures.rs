//! Test fixtures for creating test data.
//!
//! Fixtures insert rows directly so tests can pin exact expiry instants;
//! the model constructors always derive expiry from a window.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a listing with an exact expiry instant.
pub async fn create_listing_expiring_at(
    pool: &PgPool,
    owner_id: Uuid,
    title: &str,
    expires_at: DateTime<Utc>,
    active: bool,
) -> Result<Uuid> {
    let row: (Uuid,) = sqlx::query_as(
        "INSERT INTO listings (owner_id, title, active, duration_label, last_charged_amount, expires_at)
         VALUES ($1, $2, $3, '7_days', $4, $5)
         RETURNING id",
    )
    .bind(owner_id)
    .bind(title)
    .bind(active)
    .bind(Decimal::ZERO)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Insert a subscription with an exact end date.
pub async fn create_subscription_ending_at(
    pool: &PgPool,
    user_id: Uuid,
    status: &str,
    end_date: DateTime<Utc>,
) -> Result<Uuid> {
    let row: (Uuid,) = sqlx::query_as(
        "INSERT INTO subscriptions (user_id, plan_id, status, end_date)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(user_id)
    .bind(Uuid::new_v4())
    .bind(status)
    .bind(end_date)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}
