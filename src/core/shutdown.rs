use tokio_util::sync::CancellationToken;

pub fn request_shutdown(cancel_token: &CancellationToken) {
    tracing::info!("[SHUTDOWN] Shutdown requested.");
    cancel_token.cancel();
}

#[cfg(unix)]
pub async fn wait_for_termination_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            tracing::error!(error = %e, "Failed to register SIGTERM handler");
            tokio::signal::ctrl_c().await.ok();
            return;
        }
    };
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
pub async fn wait_for_termination_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
    }
}

pub async fn wait_for_shutdown_signal(cancel_token: CancellationToken) {
    tokio::select! {
        () = wait_for_termination_signal() => request_shutdown(&cancel_token),
        () = cancel_token.cancelled() => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_shutdown.rs"]
mod tests;
