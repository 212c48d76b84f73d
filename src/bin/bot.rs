use anyhow::Result;
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

use valet::commands::handlers::create_all_handlers;
use valet::commands::{CommandContext, CommandRegistry, CommandRouter};
use valet::core::Config;
use valet::transport::{TelegramTransport, Transport};

/// Back-off after a failed long poll before trying again.
const POLL_RETRY_SECS: u64 = 5;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::auto_load()?;
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    info!("starting assistant bot");

    let transport = Arc::new(TelegramTransport::new(
        &config.bot_token,
        Duration::from_secs(config.http_timeout_secs),
    )?);

    let context = Arc::new(CommandContext::new(&config)?);

    let mut registry = CommandRegistry::new();
    for handler in create_all_handlers() {
        registry.register(handler);
    }
    info!("registered {} command name(s)", registry.len());

    let router = CommandRouter::new(registry, context);
    let outbound: Arc<dyn Transport> = transport.clone();

    let mut offset: i64 = 0;
    loop {
        match transport.get_updates(offset, config.poll_timeout_secs).await {
            Ok(updates) => {
                for update in updates {
                    offset = offset.max(update.update_id + 1);
                    if let Some(msg) = update.into_incoming() {
                        router.dispatch(Arc::clone(&outbound), &msg).await;
                    }
                }
            }
            Err(err) => {
                warn!("getUpdates failed: {err}; retrying in {POLL_RETRY_SECS}s");
                tokio::time::sleep(Duration::from_secs(POLL_RETRY_SECS)).await;
            }
        }
    }
}
