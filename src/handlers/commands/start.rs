//! Start command handler
//!
//! Handles the /start command by replying with a button that opens the
//! HOS web app inside Telegram.

use teloxide::{
    Bot,
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, Message, WebAppInfo},
};
use tracing::{debug, info};

use crate::config::WebAppConfig;
use crate::utils::errors::Result;

pub const WELCOME_TEXT: &str =
    "Welcome to the HOS Support App!\nClick the button below to open the HOS App.";

pub const OPEN_APP_BUTTON: &str = "Open HOS App";

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message, web_app: &WebAppConfig) -> Result<()> {
    let chat_id = msg.chat.id;
    let user_id = msg.from.as_ref().map(|user| user.id.0);

    debug!(user_id = ?user_id, chat_id = ?chat_id, "Processing /start command");

    bot.send_message(chat_id, WELCOME_TEXT)
        .reply_markup(welcome_keyboard(web_app))
        .await?;

    info!(user_id = ?user_id, chat_id = ?chat_id, "Sent web app link");
    Ok(())
}

/// One row with a single web app button
pub fn welcome_keyboard(web_app: &WebAppConfig) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::web_app(
        OPEN_APP_BUTTON,
        WebAppInfo { url: web_app.url.clone() },
    )]])
}
