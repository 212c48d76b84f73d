// Core layer - configuration, error taxonomy, reply shaping
pub mod core;

// Features layer - per-user stores, reminders, weather, news
pub mod features;

// Transport layer - chat API integration
pub mod transport;

// Application layer - command parsing and dispatch
pub mod commands;

// Re-export core config
pub use crate::core::Config;

// Re-export feature items
pub use crate::features::{
    // Stores
    FeedPreferenceStore, UserKeyedStore,
    // Reminders
    ReminderScheduler,
    // Weather
    WeatherClient,
    // News
    NewsClient, NewsItem,
};

// Re-export transport items
pub use crate::transport::{ChatId, IncomingMessage, Transport, UserId};
