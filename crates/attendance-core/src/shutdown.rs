use std::time::Duration;

use tokio::signal;

/// Resolves when the process receives Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            ::tracing::error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                ::tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    ::tracing::info!("shutdown signal received");
}

/// Run `server` until it finishes on its own, or until `drain` has elapsed
/// after `signal` fired. Returns `false` when the drain deadline cut the
/// server off with connections still open.
pub async fn serve_with_drain<S, T, E>(server: S, signal: T, drain: Duration) -> Result<bool, E>
where
    S: Future<Output = Result<(), E>>,
    T: Future<Output = ()>,
{
    tokio::pin!(server);
    tokio::pin!(signal);

    tokio::select! {
        res = &mut server => return res.map(|()| true),
        _ = &mut signal => {},
    }

    match tokio::time::timeout(drain, server).await {
        Ok(res) => res.map(|()| true),
        Err(_) => {
            ::tracing::warn!(drain_secs = drain.as_secs(), "shutdown drain timed out");
            Ok(false)
        }
    }
}
