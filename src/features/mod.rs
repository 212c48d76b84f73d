//! # Features
//!
//! Domain subsystems behind the command layer: per-user stores, the
//! reminder scheduler, and the weather/news fetch clients.

pub mod news;
pub mod reminders;
pub mod stores;
pub mod weather;

// Re-export feature items
pub use news::{NewsClient, NewsItem};
pub use reminders::ReminderScheduler;
pub use stores::{FeedPreferenceStore, UserKeyedStore};
pub use weather::WeatherClient;
