use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Cancels `shutdown` on Ctrl-C.
pub fn listen_for_interrupt(shutdown: CancellationToken) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for interrupt signal");
            return;
        }
        info!("Keyboard interrupt received, exiting...");
        shutdown.cancel();
    });
}
