//! HOS Support Telegram Bot
//!
//! A small Telegram bot whose only job is to answer `/start` with a button
//! that opens the HOS Support web app inside Telegram. This library holds the
//! configuration, handlers and lifecycle management; `main.rs` wires them up.

pub mod config;
pub mod handlers;
pub mod lifecycle;
pub mod middleware;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BotError, Result};

pub use lifecycle::{BotLifecycle, LifecycleState, PollingClient, TelegramClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

/// Poll Telegram until Ctrl-C or SIGTERM, then shut down gracefully
pub async fn run(settings: Settings) -> Result<()> {
    let mut bot = BotLifecycle::new(TelegramClient::new(&settings));
    bot.run_until(lifecycle::shutdown_signal()).await
}
