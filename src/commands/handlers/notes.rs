//! Note command handlers
//!
//! Handles: note, notes, clear_notes
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Add /clear_notes, symmetric with /clear_tasks
//! - 1.0.0: Initial implementation

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::core::errors::HandlerError;
use crate::core::response::format_numbered;
use crate::transport::{IncomingMessage, Transport};

const NOTE_USAGE: &str = "✍️ Write the note after the command: /note buy bread";

/// Handler for note-related commands
pub struct NotesHandler;

#[async_trait]
impl CommandHandler for NotesHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["note", "notes", "clear_notes"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        transport: Arc<dyn Transport>,
        msg: &IncomingMessage,
        cmd: &Command,
    ) -> Result<(), HandlerError> {
        match cmd.name.as_str() {
            "note" => self.handle_add(&ctx, &transport, msg, cmd).await,
            "notes" => self.handle_list(&ctx, &transport, msg).await,
            "clear_notes" => self.handle_clear(&ctx, &transport, msg).await,
            _ => Ok(()),
        }
    }
}

impl NotesHandler {
    /// Handle /note - append to the caller's notes
    async fn handle_add(
        &self,
        ctx: &CommandContext,
        transport: &Arc<dyn Transport>,
        msg: &IncomingMessage,
        cmd: &Command,
    ) -> Result<(), HandlerError> {
        let text = cmd.rest(0);
        if text.trim().is_empty() {
            return Err(HandlerError::validation(NOTE_USAGE));
        }

        // The append is visible to this user's next /notes before the
        // reply goes out.
        ctx.notes.append(msg.user, text);

        transport
            .send_message(msg.chat, "✅ Note saved!")
            .await
            .map_err(HandlerError::transport)?;

        info!("note added for user {}", msg.user);
        Ok(())
    }

    /// Handle /notes - numbered listing
    async fn handle_list(
        &self,
        ctx: &CommandContext,
        transport: &Arc<dyn Transport>,
        msg: &IncomingMessage,
    ) -> Result<(), HandlerError> {
        let notes = ctx.notes.list(msg.user);

        let reply = if notes.is_empty() {
            "📭 You don't have any notes yet.".to_string()
        } else {
            format!("📝 Your notes:\n{}", format_numbered(&notes))
        };

        transport
            .send_message(msg.chat, &reply)
            .await
            .map_err(HandlerError::transport)?;

        Ok(())
    }

    /// Handle /clear_notes - drop the caller's note sequence
    async fn handle_clear(
        &self,
        ctx: &CommandContext,
        transport: &Arc<dyn Transport>,
        msg: &IncomingMessage,
    ) -> Result<(), HandlerError> {
        ctx.notes.clear(msg.user);

        transport
            .send_message(msg.chat, "🧹 Notes cleared.")
            .await
            .map_err(HandlerError::transport)?;

        info!("notes cleared for user {}", msg.user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_handler_commands() {
        let handler = NotesHandler;
        let names = handler.command_names();

        assert!(names.contains(&"note"));
        assert!(names.contains(&"notes"));
        assert!(names.contains(&"clear_notes"));
        assert_eq!(names.len(), 3);
    }
}
