//! Scheduled background tasks using tokio-cron-scheduler.
//!
//! The same sweeps are reachable over HTTP (`/cron/...`) for external
//! schedulers; this module makes the service self-sufficient when none is
//! configured.
//!
//! ```text
//! Scheduler (hourly)
//!     │
//!     └─► process_expirations()
//!             ├─► lapsed listings flipped inactive
//!             └─► near-expiry listings logged for the notification service
//! ```

use anyhow::Result;
use sqlx::PgPool;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::domains::listings::actions::process_expirations;
use crate::domains::subscriptions::actions::expire_old_subscriptions;

/// Start all scheduled tasks
pub async fn start_scheduler(pool: PgPool, notice_days: i32) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    // Listing expiration sweep - runs every hour
    let listing_pool = pool.clone();
    let listing_job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let pool = listing_pool.clone();
        Box::pin(async move {
            run_listing_sweep(&pool, notice_days).await;
        })
    })?;

    scheduler.add(listing_job).await?;

    // Subscription expiry sweep - runs daily at 00:10
    let subscription_pool = pool.clone();
    let subscription_job = Job::new_async("0 10 0 * * *", move |_uuid, _lock| {
        let pool = subscription_pool.clone();
        Box::pin(async move {
            let outcome = expire_old_subscriptions(&pool).await;
            if !outcome.success {
                tracing::error!(
                    error = outcome.error.as_deref().unwrap_or("unknown"),
                    "Scheduled subscription sweep reported failure"
                );
            }
        })
    })?;

    scheduler.add(subscription_job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Scheduled tasks started (listing sweep hourly, subscription sweep daily at 00:10)"
    );
    Ok(scheduler)
}

/// Run the listing sweep and surface who is close to expiry.
///
/// Notification delivery lives in a separate service; this log line is its
/// feed during development and the audit trail in production.
async fn run_listing_sweep(pool: &PgPool, notice_days: i32) {
    let Some(result) = process_expirations(pool, notice_days).await else {
        tracing::error!("Scheduled listing sweep reported failure");
        return;
    };

    for job in &result.expiring_jobs {
        tracing::info!(
            listing_id = %job.id,
            owner_id = %job.owner_id,
            days_left = job.days_until_expiration,
            "Listing expiring soon"
        );
    }
}
