//! Interrupt signal wait

use tracing::debug;

use crate::utils::errors::Result;

/// Resolve on Ctrl-C, or on SIGTERM where available
pub async fn shutdown_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res?;
                debug!("Received Ctrl-C");
            }
            _ = terminate.recv() => debug!("Received SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        debug!("Received Ctrl-C");
    }

    Ok(())
}
