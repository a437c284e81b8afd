//! Cabin availability watcher
//!
//! This library downloads a ferry route's cabin availability PDF, finds the
//! row for one sailing and emails a notification for every cabin type that
//! has spaces left.

pub mod config;
pub mod error;
pub mod helpers;
pub mod models;
pub mod service;

pub use config::WatchConfig;
pub use service::CabinWatcher;

// Re-export key types for convenience
pub use helpers::email::{EmailNotifier, EmailSettings, Notifier};
pub use helpers::matcher::find_availability;
pub use models::availability::{AvailabilityHit, CabinIndexFilter, SailingTarget};
