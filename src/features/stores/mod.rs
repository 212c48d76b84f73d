//! # Per-User Stores
//!
//! In-process, process-lifetime state keyed by user identity. Nothing here
//! survives a restart; that is a design decision, not an oversight.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod feeds;
pub mod user_store;

pub use feeds::FeedPreferenceStore;
pub use user_store::UserKeyedStore;
