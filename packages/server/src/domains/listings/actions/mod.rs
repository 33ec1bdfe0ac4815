//! Listing lifecycle actions - business logic functions
//!
//! Actions are called from the HTTP handlers and the in-process scheduler.
//! They own the sweep/extend semantics and translate backend failures into
//! the sentinels the callers surface (`None`, `false`, empty list).

mod extend_listing;
mod process_expirations;
mod queries;

pub use extend_listing::extend_listing;
pub use process_expirations::process_expirations;
pub use queries::expiring_listings_for_owner;
