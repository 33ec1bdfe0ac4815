//! Read-only listing queries

use chrono::Utc;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::domains::listings::models::{ExpiringListing, Listing};

/// Listings owned by `owner_id` that end within `days_ahead`, soonest
/// first.
///
/// Dashboard query: backend failures degrade to an empty list so the owner
/// dashboard still renders.
pub async fn expiring_listings_for_owner(
    owner_id: Uuid,
    days_ahead: i32,
    pool: &PgPool,
) -> Vec<ExpiringListing> {
    let as_of = Utc::now();

    match Listing::find_expiring_for_owner(owner_id, as_of, days_ahead, pool).await {
        Ok(listings) => listings
            .iter()
            .map(|listing| ExpiringListing::from_listing(listing, as_of))
            .collect(),
        Err(e) => {
            warn!(owner_id = %owner_id, error = %e, "Expiring-listings query failed");
            Vec::new()
        }
    }
}
