//! Subscription lifecycle actions

mod expire_subscriptions;

pub use expire_subscriptions::{expire_old_subscriptions, SubscriptionSweepOutcome};
