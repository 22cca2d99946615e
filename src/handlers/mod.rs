//! Bot handlers module
//!
//! This module contains the Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - The error handler that receives every handler failure

pub mod commands;
pub mod errors;

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use tracing::debug;

use crate::middleware::LoggingMiddleware;
use crate::utils::errors::BotError;

pub use commands::Command;
pub use errors::ErrorLogger;

/// Build the update dispatch tree
///
/// Only `/start` reaches an endpoint; every other update falls through to the
/// dispatcher's default handler and is ignored.
pub fn schema() -> UpdateHandler<BotError> {
    dptree::entry()
        .inspect(|middleware: Arc<LoggingMiddleware>, update: Update| {
            middleware.log_update(&update);
        })
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(commands::handle_command),
        )
}

/// Default handler for updates no branch accepted
pub async fn ignore_update(update: Arc<Update>) {
    debug!(update_id = ?update.id, "Ignoring update without a handler");
}
