//! # Transport Layer
//!
//! The chat transport seam. The core only needs two things from the outside
//! world: inbound messages (chat id, user id, text) and a way to send text
//! back. Everything transport-specific lives behind the [`Transport`] trait
//! so tests can swap in an in-memory implementation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false

pub mod telegram;

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

pub use telegram::TelegramTransport;

/// Opaque user identity supplied by the transport.
///
/// Used only as a store lookup key; no validation beyond existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delivery target for replies and reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One inbound chat message, already reduced to what the router needs.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub chat: ChatId,
    pub user: UserId,
    pub text: String,
}

/// Outbound side of the chat transport.
///
/// Implementations own their message-size limits and chunk accordingly.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver `text` to `chat`.
    async fn send_message(&self, chat: ChatId, text: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe (can be used with dyn)
    fn _assert_object_safe(_: &dyn Transport) {}

    #[test]
    fn test_id_display() {
        assert_eq!(UserId(42).to_string(), "42");
        assert_eq!(ChatId(-100123).to_string(), "-100123");
    }
}
