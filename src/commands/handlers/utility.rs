//! Utility command handlers
//!
//! Handles: start, help, time
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Add /time
//! - 1.0.0: Initial implementation

use async_trait::async_trait;
use chrono::Local;
use log::info;
use std::sync::Arc;

use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::core::errors::HandlerError;
use crate::transport::{IncomingMessage, Transport};

const START_TEXT: &str = "👋 Hi! I'm your personal assistant 🌤\n\n\
I can:\n\
🗓 Plan tasks\n\
🌦 Show the weather\n\
📰 Send you the news\n\
📝 Keep notes\n\n\
Type /help to see everything I understand.";

const HELP_TEXT: &str = "📖 Commands:\n\
/start — start the bot\n\
/help — this message\n\
/weather <city> — weather for a city\n\
/note <text> — save a note\n\
/notes — show your notes\n\
/clear_notes — delete all your notes\n\
/task <DD.MM.YY> <HH:MM> <text> — plan a task\n\
/tasks — show your tasks\n\
/clear_tasks — delete all your tasks\n\
/remind <minutes|HH:MM> <text> — one-shot reminder\n\
/setfeed <url> — choose your news feed\n\
/news — latest headlines from your feed\n\
/time — current time";

/// Handler for utility commands: start, help, time
pub struct UtilityHandler;

#[async_trait]
impl CommandHandler for UtilityHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start", "help", "time"]
    }

    async fn handle(
        &self,
        _ctx: Arc<CommandContext>,
        transport: Arc<dyn Transport>,
        msg: &IncomingMessage,
        cmd: &Command,
    ) -> Result<(), HandlerError> {
        let reply = match cmd.name.as_str() {
            "start" => START_TEXT.to_string(),
            "help" => HELP_TEXT.to_string(),
            "time" => format!(
                "🕓 Current time: {}",
                Local::now().format("%H:%M:%S, %d.%m.%Y")
            ),
            _ => return Ok(()),
        };

        transport
            .send_message(msg.chat, &reply)
            .await
            .map_err(HandlerError::transport)?;

        info!("/{} completed for user {}", cmd.name, msg.user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utility_handler_commands() {
        let handler = UtilityHandler;
        let names = handler.command_names();

        assert!(names.contains(&"start"));
        assert!(names.contains(&"help"));
        assert!(names.contains(&"time"));
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_help_mentions_every_command() {
        for cmd in [
            "/weather", "/note", "/notes", "/clear_notes", "/task", "/tasks", "/clear_tasks",
            "/remind", "/setfeed", "/news", "/time",
        ] {
            assert!(HELP_TEXT.contains(cmd), "help text missing {cmd}");
        }
    }
}
