//! Command routing
//!
//! The single dispatch point between the transport and the handlers. All
//! handler errors stop here: each one either becomes a fixed user-facing
//! reply or is logged and dropped. Nothing is retried and nothing
//! propagates far enough to take the process down.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.6.0
//!
//! ## Changelog
//! - 1.0.0: Consolidated router replacing the two legacy handler sets

use log::{debug, error, warn};
use std::sync::Arc;

use super::command::Command;
use super::context::CommandContext;
use super::registry::CommandRegistry;
use crate::transport::{IncomingMessage, Transport};

/// Routes parsed commands to their handlers and echoes everything else.
pub struct CommandRouter {
    registry: CommandRegistry,
    context: Arc<CommandContext>,
}

impl CommandRouter {
    pub fn new(registry: CommandRegistry, context: Arc<CommandContext>) -> Self {
        CommandRouter { registry, context }
    }

    /// Shared context, exposed for wiring and tests.
    pub fn context(&self) -> &Arc<CommandContext> {
        &self.context
    }

    /// Process one inbound message to completion.
    ///
    /// Command text goes to the registered handler; unrecognized `/commands`
    /// are ignored; anything else is echoed back verbatim.
    pub async fn dispatch(&self, transport: Arc<dyn Transport>, msg: &IncomingMessage) {
        match Command::parse(&msg.text) {
            Some(cmd) => match self.registry.get(&cmd.name) {
                Some(handler) => {
                    let result = handler
                        .handle(Arc::clone(&self.context), Arc::clone(&transport), msg, &cmd)
                        .await;

                    if let Err(err) = result {
                        match err.user_reply() {
                            Some(reply) => {
                                warn!("/{} failed for user {}: {err}", cmd.name, msg.user);
                                if let Err(send_err) =
                                    transport.send_message(msg.chat, reply).await
                                {
                                    error!(
                                        "failed to deliver error reply to chat {}: {send_err}",
                                        msg.chat
                                    );
                                }
                            }
                            None => {
                                error!("/{} reply delivery failed for user {}: {err}", cmd.name, msg.user);
                            }
                        }
                    }
                }
                None => {
                    debug!("ignoring unregistered command /{} from user {}", cmd.name, msg.user);
                }
            },
            None => {
                // Pass-through echo: reflect the input back verbatim.
                if msg.text.trim().is_empty() {
                    return;
                }
                if let Err(err) = transport.send_message(msg.chat, &msg.text).await {
                    error!("failed to echo to chat {}: {err}", msg.chat);
                }
            }
        }
    }
}
