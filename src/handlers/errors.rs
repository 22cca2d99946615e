//! Update error handler
//!
//! Every error returned by a handler ends up here. It is logged and counted;
//! nothing is retried and the user gets no reply.

use std::error::Error as StdError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use teloxide::error_handlers::ErrorHandler;
use tracing::error;

use crate::utils::errors::BotError;

/// Logs handler failures at error level
#[derive(Debug, Default)]
pub struct ErrorLogger {
    logged: AtomicUsize,
}

impl ErrorLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of errors logged so far
    pub fn errors_logged(&self) -> usize {
        self.logged.load(Ordering::SeqCst)
    }

    /// Log one handler failure with its full source chain
    pub fn log(&self, err: &BotError) {
        self.logged.fetch_add(1, Ordering::SeqCst);

        error!(
            severity = %err.severity(),
            recoverable = err.is_recoverable(),
            error = %err,
            chain = %source_chain(err),
            details = ?err,
            "Exception while handling an update"
        );
    }
}

impl ErrorHandler<BotError> for ErrorLogger {
    fn handle_error(self: Arc<Self>, error: BotError) -> BoxFuture<'static, ()> {
        self.log(&error);
        Box::pin(async {})
    }
}

/// Render `source()` links as `outer: inner: root`
pub fn source_chain(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut current = err.source();
    while let Some(cause) = current {
        parts.push(cause.to_string());
        current = cause.source();
    }
    parts.join(": ")
}
