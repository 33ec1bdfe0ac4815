use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::DataError;

use super::window::VisibilityWindow;

/// Listing model - SQL persistence layer
///
/// A listing is live while `active` is set and `expires_at` is in the
/// future. Lapsed rows with `active` still set are a transient state the
/// expiration sweep resolves.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Listing {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub active: bool,
    pub duration_label: String,
    pub last_charged_amount: Decimal,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A still-active listing close to the end of its visibility window.
#[derive(Debug, Clone, Serialize)]
pub struct ExpiringListing {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub expires_at: DateTime<Utc>,
    pub days_until_expiration: i64,
}

/// Output of one expiration sweep.
#[derive(Debug, Clone, Serialize)]
pub struct ExpirationResult {
    pub expired_count: u64,
    pub expiring_jobs: Vec<ExpiringListing>,
    pub processed_at: DateTime<Utc>,
}

/// Whole days until `expires_at`, rounding partial days up and clamping at
/// zero for rows already past their expiry.
pub fn days_until_expiration(as_of: DateTime<Utc>, expires_at: DateTime<Utc>) -> i64 {
    let secs = (expires_at - as_of).num_seconds();
    if secs <= 0 {
        0
    } else {
        (secs + 86_399) / 86_400
    }
}

impl ExpiringListing {
    pub fn from_listing(listing: &Listing, as_of: DateTime<Utc>) -> Self {
        Self {
            id: listing.id,
            owner_id: listing.owner_id,
            title: listing.title.clone(),
            expires_at: listing.expires_at,
            days_until_expiration: days_until_expiration(as_of, listing.expires_at),
        }
    }
}

impl Listing {
    /// Create a listing with an expiry derived from the chosen window.
    pub async fn create(
        owner_id: Uuid,
        title: &str,
        window: VisibilityWindow,
        amount: Decimal,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO listings (owner_id, title, active, duration_label, last_charged_amount, expires_at)
             VALUES ($1, $2, true, $3, $4, now() + make_interval(days => $5))
             RETURNING *",
        )
        .bind(owner_id)
        .bind(title)
        .bind(window.label())
        .bind(amount)
        .bind(window.days())
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find listing by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Self, DataError> {
        sqlx::query_as::<_, Self>("SELECT * FROM listings WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(DataError::from_fetch)
    }

    /// Deactivate every listing whose window elapsed on or before `as_of`
    /// and collect the still-active rows ending within `notice_days`.
    ///
    /// Both statements run in one transaction so the sweep observes a
    /// single consistent instant. The `active = true` precondition on the
    /// update flips each row exactly once no matter how many sweeps race
    /// on it; the returned count covers only rows flipped by this call.
    pub async fn sweep_expired(
        as_of: DateTime<Utc>,
        notice_days: i32,
        pool: &PgPool,
    ) -> Result<(u64, Vec<Self>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let flipped = sqlx::query(
            "UPDATE listings SET active = false WHERE active = true AND expires_at <= $1",
        )
        .bind(as_of)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let expiring = sqlx::query_as::<_, Self>(
            "SELECT * FROM listings
             WHERE active = true
               AND expires_at > $1
               AND expires_at <= $1 + make_interval(days => $2)
             ORDER BY expires_at ASC",
        )
        .bind(as_of)
        .bind(notice_days)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((flipped, expiring))
    }

    /// Listings owned by `owner_id` ending within `days_ahead` of `as_of`,
    /// soonest first.
    pub async fn find_expiring_for_owner(
        owner_id: Uuid,
        as_of: DateTime<Utc>,
        days_ahead: i32,
        pool: &PgPool,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM listings
             WHERE owner_id = $3
               AND active = true
               AND expires_at > $1
               AND expires_at <= $1 + make_interval(days => $2)
             ORDER BY expires_at ASC",
        )
        .bind(as_of)
        .bind(days_ahead)
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }

    /// Append `window` to the listing's remaining time and record the
    /// charge.
    ///
    /// Lapsed rows not yet swept restart from `as_of`; rows already swept
    /// inactive are not eligible. Returns the updated listing, or
    /// `DataError::NotFound` when no active row matched.
    pub async fn extend(
        id: Uuid,
        window: VisibilityWindow,
        amount: Decimal,
        as_of: DateTime<Utc>,
        pool: &PgPool,
    ) -> Result<Self, DataError> {
        sqlx::query_as::<_, Self>(
            "UPDATE listings
             SET expires_at = GREATEST(expires_at, $4) + make_interval(days => $2),
                 duration_label = $3,
                 last_charged_amount = $5
             WHERE id = $1 AND active = true
             RETURNING *",
        )
        .bind(id)
        .bind(window.days())
        .bind(window.label())
        .bind(as_of)
        .bind(amount)
        .fetch_one(pool)
        .await
        .map_err(DataError::from_fetch)
    }
}
