//! Subscriptions domain - paid access grants and their expiry sweep

pub mod actions;
pub mod models;

pub use actions::{expire_old_subscriptions, SubscriptionSweepOutcome};
pub use models::subscription::Subscription;
