//! # News Feature
//!
//! RSS digest: fetch a feed URL, pull the first few item title/link pairs,
//! format them for a chat reply.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.5.0
//! - **Toggleable**: true

pub mod rss;

use anyhow::{Context, Result};
use log::debug;
use std::time::Duration;

/// How many feed items a `/news` digest includes.
pub const DIGEST_ITEMS: usize = 5;

/// One headline from a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
}

/// HTTP client for RSS feeds.
#[derive(Clone)]
pub struct NewsClient {
    client: reqwest::Client,
}

impl NewsClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build news HTTP client")?;

        Ok(NewsClient { client })
    }

    /// Fetch `url` and extract up to `limit` items.
    pub async fn fetch_feed(&self, url: &str, limit: usize) -> Result<Vec<NewsItem>> {
        debug!("fetching feed {url}");

        let body = self
            .client
            .get(url)
            .send()
            .await
            .context("feed request failed")?
            .error_for_status()
            .context("feed returned an error status")?
            .text()
            .await
            .context("feed response was not text")?;

        rss::parse_items(&body, limit)
    }
}

/// Format items as "title / link" pairs separated by blank lines.
pub fn format_digest(items: &[NewsItem]) -> String {
    items
        .iter()
        .map(|item| format!("📰 {}\n🔗 {}", item.title, item.link))
        .collect::<Vec<_>>()
        .join("\n\n")
}
