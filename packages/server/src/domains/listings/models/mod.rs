pub mod listing;
pub mod window;

pub use listing::{ExpirationResult, ExpiringListing, Listing};
pub use window::VisibilityWindow;
