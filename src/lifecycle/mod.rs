//! Bot lifecycle management
//!
//! Drives the polling client through
//! `Uninitialized -> Initialized -> Polling -> ShuttingDown -> Stopped`.
//! The client itself sits behind [`PollingClient`] so the sequencing does not
//! depend on the Telegram transport.

pub mod signal;
pub mod telegram;

use std::fmt;
use std::future::Future;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::utils::errors::{BotError, Result};

pub use signal::shutdown_signal;
pub use telegram::TelegramClient;

/// Lifecycle states of the bot client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Initialized,
    Polling,
    ShuttingDown,
    Stopped,
}

impl LifecycleState {
    /// Whether `next` may directly follow `self`
    ///
    /// `Initialized -> ShuttingDown` only happens when polling fails to start,
    /// so the client is still released.
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;

        matches!(
            (self, next),
            (Uninitialized, Initialized)
                | (Initialized, Polling)
                | (Initialized, ShuttingDown)
                | (Polling, ShuttingDown)
                | (ShuttingDown, Stopped)
        )
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Operations the lifecycle drives, in the order it drives them
#[async_trait]
pub trait PollingClient: Send {
    /// Authenticate and prepare the client
    async fn initialize(&mut self) -> Result<()>;

    /// Register handlers
    async fn start(&mut self) -> Result<()>;

    /// Begin fetching updates in the background
    async fn start_polling(&mut self) -> Result<()>;

    /// Stop accepting updates and wait for in-flight handlers
    async fn stop(&mut self) -> Result<()>;

    /// Release the network resources
    async fn shutdown(&mut self) -> Result<()>;
}

/// Owns the polling client and its state
pub struct BotLifecycle<C> {
    client: C,
    state: LifecycleState,
}

impl<C: PollingClient> BotLifecycle<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: LifecycleState::Uninitialized,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Uninitialized -> Initialized
    pub async fn initialize(&mut self) -> Result<()> {
        self.ensure_can(LifecycleState::Initialized)?;
        self.client.initialize().await?;
        self.transition(LifecycleState::Initialized)
    }

    /// Initialized -> Polling
    pub async fn start(&mut self) -> Result<()> {
        self.ensure_can(LifecycleState::Polling)?;
        self.client.start().await?;
        self.client.start_polling().await?;
        self.transition(LifecycleState::Polling)?;

        info!("Bot started. Listening for messages...");
        Ok(())
    }

    /// Stop, then shut down. Calling it again once stopped does nothing.
    pub async fn teardown(&mut self) -> Result<()> {
        if self.state == LifecycleState::Stopped {
            return Ok(());
        }

        self.transition(LifecycleState::ShuttingDown)?;
        info!("Shutting down bot...");

        let stopped = self.client.stop().await;
        if let Err(e) = &stopped {
            warn!(error = %e, "Failed to stop polling cleanly");
        }
        let released = self.client.shutdown().await;

        self.transition(LifecycleState::Stopped)?;
        info!("Bot stopped");

        stopped.and(released)
    }

    /// Run the whole lifecycle, blocking on `signal` while polling
    ///
    /// Teardown runs once whether the signal fires or fails to register.
    pub async fn run_until<F>(&mut self, signal: F) -> Result<()>
    where
        F: Future<Output = Result<()>>,
    {
        self.initialize().await?;

        if let Err(e) = self.start().await {
            error!(error = %e, "Failed to start polling");
            if let Err(teardown_err) = self.teardown().await {
                warn!(error = %teardown_err, "Teardown after failed start also failed");
            }
            return Err(e);
        }

        let waited = signal.await;
        match &waited {
            Ok(()) => info!("Interrupt received"),
            Err(e) => error!(error = %e, "Waiting for interrupt failed"),
        }

        self.teardown().await?;
        waited
    }

    fn ensure_can(&self, next: LifecycleState) -> Result<()> {
        if self.state.can_transition_to(next) {
            Ok(())
        } else {
            Err(BotError::InvalidStateTransition {
                from: self.state.to_string(),
                to: next.to_string(),
            })
        }
    }

    fn transition(&mut self, next: LifecycleState) -> Result<()> {
        self.ensure_can(next)?;
        info!(from = %self.state, to = %next, "Lifecycle transition");
        self.state = next;
        Ok(())
    }
}
