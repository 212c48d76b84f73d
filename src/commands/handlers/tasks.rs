//! Task command handlers
//!
//! Handles: task, tasks, clear_tasks
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.4.0

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::core::errors::HandlerError;
use crate::core::response::format_numbered;
use crate::transport::{IncomingMessage, Transport};

const TASK_USAGE: &str = "🗓 Usage: /task <DD.MM.YY> <HH:MM> <text>, e.g. /task 24.12.25 18:30 buy gifts";

/// Handler for task-related commands
///
/// A task entry is the composed "date time — text" string; the date and
/// time fields are stored as the user typed them, with no calendar
/// validation.
pub struct TasksHandler;

#[async_trait]
impl CommandHandler for TasksHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["task", "tasks", "clear_tasks"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        transport: Arc<dyn Transport>,
        msg: &IncomingMessage,
        cmd: &Command,
    ) -> Result<(), HandlerError> {
        match cmd.name.as_str() {
            "task" => self.handle_add(&ctx, &transport, msg, cmd).await,
            "tasks" => self.handle_list(&ctx, &transport, msg).await,
            "clear_tasks" => self.handle_clear(&ctx, &transport, msg).await,
            _ => Ok(()),
        }
    }
}

impl TasksHandler {
    /// Handle /task - append a composed date/time/text entry
    async fn handle_add(
        &self,
        ctx: &CommandContext,
        transport: &Arc<dyn Transport>,
        msg: &IncomingMessage,
        cmd: &Command,
    ) -> Result<(), HandlerError> {
        if cmd.args.len() < 3 {
            return Err(HandlerError::validation(TASK_USAGE));
        }

        let entry = format!("{} {} — {}", cmd.args[0], cmd.args[1], cmd.rest(2));
        ctx.tasks.append(msg.user, entry);

        transport
            .send_message(msg.chat, "✅ Task planned!")
            .await
            .map_err(HandlerError::transport)?;

        info!("task added for user {}", msg.user);
        Ok(())
    }

    /// Handle /tasks - numbered listing
    async fn handle_list(
        &self,
        ctx: &CommandContext,
        transport: &Arc<dyn Transport>,
        msg: &IncomingMessage,
    ) -> Result<(), HandlerError> {
        let tasks = ctx.tasks.list(msg.user);

        let reply = if tasks.is_empty() {
            "📭 You don't have any planned tasks.".to_string()
        } else {
            format!("🗓 Your tasks:\n{}", format_numbered(&tasks))
        };

        transport
            .send_message(msg.chat, &reply)
            .await
            .map_err(HandlerError::transport)?;

        Ok(())
    }

    /// Handle /clear_tasks - drop the caller's task sequence
    async fn handle_clear(
        &self,
        ctx: &CommandContext,
        transport: &Arc<dyn Transport>,
        msg: &IncomingMessage,
    ) -> Result<(), HandlerError> {
        ctx.tasks.clear(msg.user);

        transport
            .send_message(msg.chat, "🧹 Tasks cleared.")
            .await
            .map_err(HandlerError::transport)?;

        info!("tasks cleared for user {}", msg.user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_handler_commands() {
        let handler = TasksHandler;
        let names = handler.command_names();

        assert!(names.contains(&"task"));
        assert!(names.contains(&"tasks"));
        assert!(names.contains(&"clear_tasks"));
        assert_eq!(names.len(), 3);
    }
}
