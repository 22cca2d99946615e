//! Logging middleware
//!
//! Records every inbound update at debug level before it reaches a handler,
//! so ignored updates still leave a trace.

use serde_json::{json, Value};
use teloxide::types::{Chat, Update, User};
use tracing::debug;

/// Logging middleware for bot interactions
#[derive(Clone, Debug)]
pub struct LoggingMiddleware {
    log_user_interactions: bool,
}

impl LoggingMiddleware {
    /// Create a new LoggingMiddleware instance
    pub fn new(log_user_interactions: bool) -> Self {
        Self { log_user_interactions }
    }

    /// Log incoming update
    pub fn log_update(&self, update: &Update) {
        if !self.log_user_interactions {
            return;
        }

        let user = update.from().map(user_info);
        let chat = update.chat().map(chat_info);

        debug!(
            update_id = ?update.id,
            user = ?user,
            chat = ?chat,
            "Update received"
        );
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new(true)
    }
}

fn user_info(user: &User) -> Value {
    json!({
        "id": user.id.0,
        "username": user.username,
        "is_bot": user.is_bot
    })
}

fn chat_info(chat: &Chat) -> Value {
    json!({
        "id": chat.id.0,
        "type": chat_kind(chat)
    })
}

/// Short name of the chat type used in log fields
pub fn chat_kind(chat: &Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "other"
    }
}
