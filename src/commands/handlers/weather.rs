//! Weather command handler
//!
//! Handles: weather
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0

use async_trait::async_trait;
use log::{error, info};
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::core::errors::HandlerError;
use crate::transport::{IncomingMessage, Transport};

const WEATHER_USAGE: &str = "🌆 Tell me the city: /weather London";

const WEATHER_UNAVAILABLE: &str = "❌ Couldn't fetch the weather right now. Try again later.";

/// Handler for the weather lookup command
pub struct WeatherHandler;

#[async_trait]
impl CommandHandler for WeatherHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["weather"]
    }

    async fn handle(
        &self,
        ctx: Arc<CommandContext>,
        transport: Arc<dyn Transport>,
        msg: &IncomingMessage,
        cmd: &Command,
    ) -> Result<(), HandlerError> {
        let city = cmd.rest(0);
        if city.trim().is_empty() {
            return Err(HandlerError::validation(WEATHER_USAGE));
        }

        let request_id = Uuid::new_v4();
        info!("[{request_id}] /weather | city: {city} | user: {}", msg.user);

        let line = match ctx.weather.fetch(&city).await {
            Ok(line) => line,
            Err(err) => {
                error!("[{request_id}] weather fetch failed: {err}");
                return Err(HandlerError::fetch(WEATHER_UNAVAILABLE, err));
            }
        };

        transport
            .send_message(msg.chat, &format!("☀️ {line}"))
            .await
            .map_err(HandlerError::transport)?;

        info!("[{request_id}] /weather completed for user {}", msg.user);
        Ok(())
    }
}
