//! HOS Support Telegram Bot
//!
//! Main application entry point

use anyhow::Context;
use tracing::info;

use hos_support_bot::{config::Settings, utils::logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    // Load configuration; fails before any network client exists
    let settings = Settings::new().context("Failed to load configuration")?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", hos_support_bot::info());

    hos_support_bot::run(settings).await?;

    info!("Bot has been shut down.");
    Ok(())
}
