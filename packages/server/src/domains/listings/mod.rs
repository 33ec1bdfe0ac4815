//! Listings domain - visibility windows, expiry sweeps and extensions

pub mod actions;
pub mod models;

pub use models::listing::{ExpirationResult, ExpiringListing, Listing};
pub use models::window::VisibilityWindow;
