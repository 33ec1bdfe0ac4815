//! Listing extension action

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::common::DataError;
use crate::domains::listings::models::{Listing, VisibilityWindow};

/// Extend a listing's visibility window on owner request.
///
/// Appends the purchased window to the listing's remaining time and records
/// the charged amount. Only active listings are eligible; an unknown or
/// already-swept listing reports failure. Every failure surfaces as
/// `false`, matching the inline "failed, try again" treatment in the UI.
pub async fn extend_listing(
    listing_id: Uuid,
    window: VisibilityWindow,
    amount: Decimal,
    pool: &PgPool,
) -> bool {
    let as_of = Utc::now();

    match Listing::extend(listing_id, window, amount, as_of, pool).await {
        Ok(listing) => {
            info!(
                listing_id = %listing.id,
                window = %window,
                new_expiry = %listing.expires_at,
                "Listing extended"
            );
            true
        }
        Err(DataError::NotFound) => {
            warn!(listing_id = %listing_id, "Extension refused: no active listing with that id");
            false
        }
        Err(e) => {
            error!(listing_id = %listing_id, error = %e, "Extension failed");
            false
        }
    }
}
