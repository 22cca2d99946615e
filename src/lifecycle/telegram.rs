//! Teloxide-backed polling client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use teloxide::dispatching::{DefaultKey, ShutdownToken};
use teloxide::prelude::*;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::{Settings, WebAppConfig};
use crate::handlers::{self, ErrorLogger};
use crate::middleware::LoggingMiddleware;
use crate::utils::errors::{BotError, Result};
use super::PollingClient;

const SHUTDOWN_RETRY: Duration = Duration::from_millis(50);

/// Long-polling Telegram client
pub struct TelegramClient {
    bot: Bot,
    web_app: Arc<WebAppConfig>,
    error_logger: Arc<ErrorLogger>,
    dispatcher: Option<Dispatcher<Bot, BotError, DefaultKey>>,
    shutdown_token: Option<ShutdownToken>,
    polling: Option<JoinHandle<()>>,
}

impl TelegramClient {
    /// Build a client bound to the configured bot token
    pub fn new(settings: &Settings) -> Self {
        Self::with_bot(Bot::new(&settings.bot.token), settings.web_app.clone())
    }

    /// Build a client around an existing bot, e.g. one pointed at another API URL
    pub fn with_bot(bot: Bot, web_app: WebAppConfig) -> Self {
        Self {
            bot,
            web_app: Arc::new(web_app),
            error_logger: ErrorLogger::new(),
            dispatcher: None,
            shutdown_token: None,
            polling: None,
        }
    }

    pub fn error_logger(&self) -> Arc<ErrorLogger> {
        self.error_logger.clone()
    }

    pub fn is_polling(&self) -> bool {
        self.polling.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

#[async_trait]
impl PollingClient for TelegramClient {
    async fn initialize(&mut self) -> Result<()> {
        let me = self.bot.get_me().await?;
        info!(bot_id = me.user.id.0, username = %me.username(), "Bot authenticated");
        Ok(())
    }

    async fn start(&mut self) -> Result<()> {
        let dispatcher = Dispatcher::builder(self.bot.clone(), handlers::schema())
            .dependencies(dptree::deps![
                self.web_app.clone(),
                Arc::new(LoggingMiddleware::default())
            ])
            .default_handler(handlers::ignore_update)
            .error_handler(self.error_logger.clone())
            .build();

        self.shutdown_token = Some(dispatcher.shutdown_token());
        self.dispatcher = Some(dispatcher);

        debug!("Handlers registered");
        Ok(())
    }

    async fn start_polling(&mut self) -> Result<()> {
        let mut dispatcher = self.dispatcher.take().ok_or_else(|| BotError::InvalidStateTransition {
            from: "no_dispatcher".to_string(),
            to: "polling".to_string(),
        })?;

        self.polling = Some(tokio::spawn(async move {
            dispatcher.dispatch().await;
        }));

        info!("Polling started");
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        let Some(token) = self.shutdown_token.take() else {
            return Ok(());
        };

        // The dispatcher reports idle until its task has actually begun
        // dispatching, and again once it has finished.
        loop {
            match token.shutdown() {
                Ok(done) => {
                    done.await;
                    break;
                }
                Err(_) if self.is_polling() => tokio::time::sleep(SHUTDOWN_RETRY).await,
                Err(_) => break,
            }
        }

        info!("Polling stopped");
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.dispatcher = None;

        if let Some(handle) = self.polling.take() {
            handle.await?;
        }

        info!(
            errors_logged = self.error_logger.errors_logged(),
            "Bot client released"
        );
        Ok(())
    }
}
