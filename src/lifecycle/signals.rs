//! OS signal handling.

use crate::lifecycle::shutdown::ShutdownListener;

/// Resolve when Ctrl+C is received or a stop is requested through
/// [`Shutdown`](crate::Shutdown).
///
/// If the Ctrl+C handler cannot be installed, only the handle can stop the
/// server.
pub async fn shutdown_signal(mut shutdown: ShutdownListener) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl+C received"),
        _ = shutdown.triggered() => tracing::info!("Shutdown requested"),
    }
}
