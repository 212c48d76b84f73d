//! Shared context for command handlers
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Add FeedPreferenceStore for /setfeed
//! - 1.0.0: Initial implementation with core shared state

use anyhow::Result;
use std::time::Duration;

use crate::core::Config;
use crate::features::news::NewsClient;
use crate::features::reminders::ReminderScheduler;
use crate::features::stores::{FeedPreferenceStore, UserKeyedStore};
use crate::features::weather::WeatherClient;

/// Shared context for all command handlers
///
/// Contains the services most handlers need:
/// - per-user note and task stores
/// - FeedPreferenceStore for `/setfeed` / `/news`
/// - ReminderScheduler for `/remind`
/// - weather and news fetch clients
/// - bot start time for uptime logging
///
/// Constructed once at process start and passed into every handler; tests
/// build isolated instances from a test Config.
#[derive(Clone)]
pub struct CommandContext {
    pub notes: UserKeyedStore,
    pub tasks: UserKeyedStore,
    pub feeds: FeedPreferenceStore,
    pub scheduler: ReminderScheduler,
    pub weather: WeatherClient,
    pub news: NewsClient,
    pub start_time: std::time::Instant,
}

impl CommandContext {
    /// Build a context with fresh, empty stores from `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let http_timeout = Duration::from_secs(config.http_timeout_secs);

        Ok(CommandContext {
            notes: UserKeyedStore::new(),
            tasks: UserKeyedStore::new(),
            feeds: FeedPreferenceStore::new(config.default_feed_url.clone()),
            scheduler: ReminderScheduler::new(),
            weather: WeatherClient::new(config.weather_url.clone(), http_timeout)?,
            news: NewsClient::new(http_timeout)?,
            start_time: std::time::Instant::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_context_clone() {
        // CommandContext should be Clone for sharing across handlers
        fn assert_clone<T: Clone>() {}
        assert_clone::<CommandContext>();
    }
}
