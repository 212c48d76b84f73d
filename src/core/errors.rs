//! Handler-boundary error taxonomy
//!
//! Every error a command handler can produce is converted into a user-facing
//! reply (or deliberately dropped) by the router; nothing propagates far
//! enough to crash the process and nothing is retried.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.4.0
//!
//! ## Changelog
//! - 1.0.0: Extracted from ad-hoc per-handler error strings

use std::error::Error;
use std::fmt;

/// Error returned by a command handler.
///
/// The router maps each variant to the reply the user sees via
/// [`HandlerError::user_reply`]; `Transport` has no reply because the reply
/// channel itself is what failed.
#[derive(Debug)]
pub enum HandlerError {
    /// A required argument is missing or empty; the user is re-prompted
    /// with the command's usage string.
    Validation { usage: &'static str },
    /// Malformed time or number input; the user gets a fixed correction
    /// message and nothing is scheduled or stored.
    Parse { reply: &'static str },
    /// An outbound weather/news fetch failed; the user gets a fixed
    /// "temporarily unavailable" message and the cause is only logged.
    Fetch {
        reply: &'static str,
        source: anyhow::Error,
    },
    /// Sending the reply itself failed.
    Transport { source: anyhow::Error },
}

impl HandlerError {
    pub fn validation(usage: &'static str) -> Self {
        HandlerError::Validation { usage }
    }

    pub fn parse(reply: &'static str) -> Self {
        HandlerError::Parse { reply }
    }

    pub fn fetch(reply: &'static str, source: anyhow::Error) -> Self {
        HandlerError::Fetch { reply, source }
    }

    pub fn transport(source: anyhow::Error) -> Self {
        HandlerError::Transport { source }
    }

    /// The text the router should send back to the user, if any.
    pub fn user_reply(&self) -> Option<&str> {
        match self {
            HandlerError::Validation { usage } => Some(usage),
            HandlerError::Parse { reply } => Some(reply),
            HandlerError::Fetch { reply, .. } => Some(reply),
            HandlerError::Transport { .. } => None,
        }
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::Validation { usage } => write!(f, "missing argument (usage: {usage})"),
            HandlerError::Parse { reply } => write!(f, "unparseable input ({reply})"),
            HandlerError::Fetch { source, .. } => write!(f, "fetch failed: {source}"),
            HandlerError::Transport { source } => write!(f, "reply delivery failed: {source}"),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Fetch { source, .. } | HandlerError::Transport { source } => {
                Some(source.as_ref())
            }
            _ => None,
        }
    }
}

/// A reminder's final send failed.
///
/// Delivery is best effort: the scheduler logs this exactly once and drops
/// it. It is never retried and never surfaced to the user.
#[derive(Debug)]
pub struct DeliveryError(pub anyhow::Error);

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delivery failed: {}", self.0)
    }
}

impl Error for DeliveryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.0.as_ref())
    }
}

impl From<anyhow::Error> for DeliveryError {
    fn from(err: anyhow::Error) -> Self {
        DeliveryError(err)
    }
}
