//! Command handler trait and infrastructure
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use async_trait::async_trait;
use std::sync::Arc;

use super::command::Command;
use super::context::CommandContext;
use crate::core::errors::HandlerError;
use crate::transport::{IncomingMessage, Transport};

/// Trait for command handlers
///
/// Each handler processes one or more command names. Handlers are registered
/// with a CommandRegistry and dispatched by name; happy-path replies go out
/// through the transport inside the handler, while every failure is returned
/// as a [`HandlerError`] for the router to turn into a user-facing reply.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl CommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(
///         &self,
///         _ctx: Arc<CommandContext>,
///         transport: Arc<dyn Transport>,
///         msg: &IncomingMessage,
///         _cmd: &Command,
///     ) -> Result<(), HandlerError> {
///         transport
///             .send_message(msg.chat, "Pong!")
///             .await
///             .map_err(HandlerError::transport)
///     }
/// }
/// ```
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the command
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared command context with stores, scheduler and clients
    /// * `transport` - Outbound side of the chat transport
    /// * `msg` - The inbound message (chat, user, raw text)
    /// * `cmd` - The parsed command (name, args)
    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        transport: Arc<dyn Transport>,
        msg: &IncomingMessage,
        cmd: &Command,
    ) -> Result<(), HandlerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe (can be used with dyn)
    fn _assert_object_safe(_: &dyn CommandHandler) {}
}
