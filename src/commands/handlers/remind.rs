//! Reminder command handler
//!
//! Handles: remind
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.4.0

use async_trait::async_trait;
use chrono::Local;
use log::info;
use std::sync::Arc;

use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::core::errors::{DeliveryError, HandlerError};
use crate::features::reminders::parse_time_spec;
use crate::transport::{IncomingMessage, Transport};

const REMIND_USAGE: &str = "⏰ Usage: /remind <minutes|HH:MM> <text>, e.g. /remind 25 stretch";

const BAD_TIME: &str =
    "❌ I couldn't read that time. Use minutes (/remind 25 stretch) or HH:MM (/remind 18:30 stretch).";

/// Handler for the one-shot reminder command
pub struct RemindHandler;

#[async_trait]
impl CommandHandler for RemindHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["remind"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        transport: Arc<dyn Transport>,
        msg: &IncomingMessage,
        cmd: &Command,
    ) -> Result<(), HandlerError> {
        if cmd.args.len() < 2 {
            return Err(HandlerError::validation(REMIND_USAGE));
        }

        // Fail fast on the time before anything is scheduled.
        let spec = parse_time_spec(&cmd.args[0], Local::now().naive_local())
            .map_err(|_| HandlerError::parse(BAD_TIME))?;

        let text = cmd.rest(1);
        if text.trim().is_empty() {
            return Err(HandlerError::validation(REMIND_USAGE));
        }

        // Acknowledgement is computed from the resolved target before the
        // reminder is handed to the scheduler.
        let ack = format!("⏰ Reminder set for {}.", spec.target.format("%H:%M"));

        let chat = msg.chat;
        let delivery_transport = Arc::clone(&transport);
        ctx.scheduler.schedule(spec.delay, async move {
            delivery_transport
                .send_message(chat, &text)
                .await
                .map_err(DeliveryError::from)
        });

        transport
            .send_message(msg.chat, &ack)
            .await
            .map_err(HandlerError::transport)?;

        info!(
            "reminder scheduled for user {} at {}",
            msg.user,
            spec.target.format("%H:%M")
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remind_handler_commands() {
        let handler = RemindHandler;
        assert_eq!(handler.command_names(), &["remind"]);
    }
}
