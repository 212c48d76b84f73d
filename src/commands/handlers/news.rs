//! News command handlers
//!
//! Handles: news, setfeed
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.5.0

use async_trait::async_trait;
use log::{error, info};
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::core::errors::HandlerError;
use crate::features::news::{format_digest, DIGEST_ITEMS};
use crate::transport::{IncomingMessage, Transport};

const SETFEED_USAGE: &str = "📡 Usage: /setfeed <url>";

const NEWS_UNAVAILABLE: &str = "⚠️ News is temporarily unavailable. Try again later.";

/// Handler for news-related commands
pub struct NewsHandler;

#[async_trait]
impl CommandHandler for NewsHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["news", "setfeed"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        transport: Arc<dyn Transport>,
        msg: &IncomingMessage,
        cmd: &Command,
    ) -> Result<(), HandlerError> {
        match cmd.name.as_str() {
            "news" => self.handle_news(&ctx, &transport, msg).await,
            "setfeed" => self.handle_setfeed(&ctx, &transport, msg, cmd).await,
            _ => Ok(()),
        }
    }
}

impl NewsHandler {
    /// Handle /setfeed - overwrite the caller's preferred feed
    async fn handle_setfeed(
        &self,
        ctx: &CommandContext,
        transport: &Arc<dyn Transport>,
        msg: &IncomingMessage,
        cmd: &Command,
    ) -> Result<(), HandlerError> {
        let url = cmd.rest(0);
        if url.trim().is_empty() {
            return Err(HandlerError::validation(SETFEED_USAGE));
        }

        // No URL validation here: a bad address surfaces on the next /news.
        ctx.feeds.set(msg.user, url.trim());

        transport
            .send_message(msg.chat, "📡 News source updated.")
            .await
            .map_err(HandlerError::transport)?;

        info!("feed preference updated for user {}", msg.user);
        Ok(())
    }

    /// Handle /news - digest of the caller's preferred (or default) feed
    async fn handle_news(
        &self,
        ctx: &CommandContext,
        transport: &Arc<dyn Transport>,
        msg: &IncomingMessage,
    ) -> Result<(), HandlerError> {
        let url = ctx.feeds.get(msg.user);

        let request_id = Uuid::new_v4();
        info!("[{request_id}] /news | feed: {url} | user: {}", msg.user);

        let items = match ctx.news.fetch_feed(&url, DIGEST_ITEMS).await {
            Ok(items) if !items.is_empty() => items,
            Ok(_) => {
                error!("[{request_id}] feed {url} contained no items");
                return Err(HandlerError::fetch(
                    NEWS_UNAVAILABLE,
                    anyhow::anyhow!("feed contained no items"),
                ));
            }
            Err(err) => {
                error!("[{request_id}] news fetch failed: {err}");
                return Err(HandlerError::fetch(NEWS_UNAVAILABLE, err));
            }
        };

        transport
            .send_message(msg.chat, &format_digest(&items))
            .await
            .map_err(HandlerError::transport)?;

        info!(
            "[{request_id}] /news completed with {} item(s) for user {}",
            items.len(),
            msg.user
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_handler_commands() {
        let handler = NewsHandler;
        let names = handler.command_names();

        assert!(names.contains(&"news"));
        assert!(names.contains(&"setfeed"));
        assert_eq!(names.len(), 2);
    }
}
