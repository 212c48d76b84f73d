//! Per-user news feed preference
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.5.0

use dashmap::DashMap;
use std::sync::Arc;

use crate::transport::UserId;

/// One preferred feed URL per user, with a process-wide default.
///
/// `set` overwrites unconditionally and performs no URL validation; a bad
/// URL only surfaces when `/news` tries to fetch it.
#[derive(Clone)]
pub struct FeedPreferenceStore {
    feeds: Arc<DashMap<UserId, String>>,
    default_url: String,
}

impl FeedPreferenceStore {
    pub fn new(default_url: impl Into<String>) -> Self {
        FeedPreferenceStore {
            feeds: Arc::new(DashMap::new()),
            default_url: default_url.into(),
        }
    }

    /// Overwrite `user`'s preferred feed.
    pub fn set(&self, user: UserId, url: impl Into<String>) {
        self.feeds.insert(user, url.into());
    }

    /// The user's preferred feed, or the default when never set.
    pub fn get(&self, user: UserId) -> String {
        self.feeds
            .get(&user)
            .map(|url| url.value().clone())
            .unwrap_or_else(|| self.default_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANN: UserId = UserId(1);
    const BOB: UserId = UserId(2);

    #[test]
    fn test_default_when_unset() {
        let store = FeedPreferenceStore::new("https://example.org/rss.xml");
        assert_eq!(store.get(ANN), "https://example.org/rss.xml");
    }

    #[test]
    fn test_set_overwrites() {
        let store = FeedPreferenceStore::new("https://example.org/rss.xml");
        store.set(ANN, "https://news.example.com/feed");
        store.set(ANN, "https://other.example.com/feed");
        assert_eq!(store.get(ANN), "https://other.example.com/feed");
    }

    #[test]
    fn test_preference_is_per_user() {
        let store = FeedPreferenceStore::new("https://example.org/rss.xml");
        store.set(ANN, "https://news.example.com/feed");

        assert_eq!(store.get(ANN), "https://news.example.com/feed");
        assert_eq!(store.get(BOB), "https://example.org/rss.xml");
    }
}
