// Gigmap - Lifecycle Core
//
// Backend service that owns the listing and subscription lifecycle for the
// Gigmap marketplace: expiry sweeps, visibility-window extensions, and the
// HTTP triggers and schedules that drive them.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
