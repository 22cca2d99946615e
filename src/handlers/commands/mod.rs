//! Command handlers module
//!
//! This module contains the handler for the /start command.

pub mod start;

use std::sync::Arc;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::config::WebAppConfig;
use crate::utils::errors::Result;

/// All available bot commands
///
/// Command names match exactly and case-sensitively. A deep-link payload
/// after `/start` is captured but never used.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "HOS Support commands:")]
pub enum Command {
    #[command(description = "Open the HOS Support App")]
    Start(String),
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    web_app: Arc<WebAppConfig>,
) -> Result<()> {
    match cmd {
        Command::Start(_) => start::handle_start(bot, msg, &web_app).await,
    }
}
