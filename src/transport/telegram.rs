//! Telegram Bot API transport
//!
//! Minimal long-polling client: `getUpdates` for inbound messages,
//! `sendMessage` for replies. Only the handful of wire fields the router
//! needs are deserialized; everything else in an update is ignored.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Chunk outbound messages to the 4096-char API limit
//! - 1.0.0: Initial long-polling implementation

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use std::time::Duration;

use super::{ChatId, IncomingMessage, Transport, UserId};
use crate::core::response::chunk_for_message;

const API_BASE: &str = "https://api.telegram.org";

/// Extra headroom on top of the long-poll timeout so the HTTP request
/// outlives the server-side wait.
const POLL_GRACE_SECS: u64 = 10;

/// Envelope every Bot API method returns.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    message: Option<WireMessage>,
}

#[derive(Debug, Deserialize)]
struct WireMessage {
    chat: WireChat,
    #[serde(default)]
    from: Option<WireUser>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireChat {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    id: i64,
}

impl Update {
    /// Reduce an update to the message the router consumes.
    ///
    /// Updates without a text message (edits, stickers, joins) yield None.
    pub fn into_incoming(self) -> Option<IncomingMessage> {
        let message = self.message?;
        let text = message.text?;
        let user = message.from.as_ref()?.id;
        Some(IncomingMessage {
            chat: ChatId(message.chat.id),
            user: UserId(user),
            text,
        })
    }
}

/// Telegram Bot API client.
#[derive(Clone)]
pub struct TelegramTransport {
    client: reqwest::Client,
    base_url: String,
}

impl TelegramTransport {
    pub fn new(token: &str, http_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(http_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(TelegramTransport {
            client,
            base_url: format!("{API_BASE}/bot{token}"),
        })
    }

    /// Long-poll for new updates starting at `offset`.
    ///
    /// Blocks server-side for up to `timeout_secs`; an empty vec just means
    /// nothing arrived within the window.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        let response = self
            .client
            .get(format!("{}/getUpdates", self.base_url))
            .query(&[("offset", offset), ("timeout", timeout_secs as i64)])
            .timeout(Duration::from_secs(timeout_secs + POLL_GRACE_SECS))
            .send()
            .await
            .context("getUpdates request failed")?;

        let envelope: ApiResponse<Vec<Update>> = response
            .json()
            .await
            .context("Failed to parse getUpdates response")?;

        if !envelope.ok {
            anyhow::bail!(
                "getUpdates rejected: {}",
                envelope.description.unwrap_or_else(|| "unknown error".to_string())
            );
        }

        let updates = envelope.result.unwrap_or_default();
        if !updates.is_empty() {
            debug!("received {} update(s)", updates.len());
        }
        Ok(updates)
    }

    async fn send_chunk(&self, chat: ChatId, text: &str) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/sendMessage", self.base_url))
            .json(&serde_json::json!({ "chat_id": chat.0, "text": text }))
            .send()
            .await
            .context("sendMessage request failed")?;

        let envelope: ApiResponse<serde_json::Value> = response
            .json()
            .await
            .context("Failed to parse sendMessage response")?;

        if !envelope.ok {
            anyhow::bail!(
                "sendMessage rejected for chat {}: {}",
                chat,
                envelope.description.unwrap_or_else(|| "unknown error".to_string())
            );
        }

        Ok(())
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_message(&self, chat: ChatId, text: &str) -> Result<()> {
        for chunk in chunk_for_message(text) {
            self.send_chunk(chat, &chunk).await?;
        }
        Ok(())
    }
}
