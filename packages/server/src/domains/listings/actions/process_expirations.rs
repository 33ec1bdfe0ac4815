//! Expiration sweep action

use chrono::Utc;
use sqlx::PgPool;
use tracing::{error, info};

use crate::domains::listings::models::{ExpirationResult, ExpiringListing, Listing};

/// Run one expiration sweep over all listings.
///
/// Flips every lapsed listing inactive and reports the still-active
/// listings ending within `notice_days`, soonest first.
///
/// Backend failures are logged and reported as `None`; the trigger that
/// called this turns the sentinel into an HTTP error.
pub async fn process_expirations(pool: &PgPool, notice_days: i32) -> Option<ExpirationResult> {
    let as_of = Utc::now();

    match Listing::sweep_expired(as_of, notice_days, pool).await {
        Ok((expired_count, expiring)) => {
            info!(
                expired_count,
                expiring_soon = expiring.len(),
                "Expiration sweep complete"
            );

            let expiring_jobs = expiring
                .iter()
                .map(|listing| ExpiringListing::from_listing(listing, as_of))
                .collect();

            Some(ExpirationResult {
                expired_count,
                expiring_jobs,
                processed_at: as_of,
            })
        }
        Err(e) => {
            error!(error = %e, "Expiration sweep failed");
            None
        }
    }
}
