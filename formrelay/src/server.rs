//! Process entry: build state, check the transport, serve HTTP

use anyhow::Context;
use tracing::info;

use crate::config::RelayConfig;
use crate::email::verify_transport;
use crate::state::AppState;

/// Run the relay until the listener fails or the process is interrupted
///
/// The transport check runs in the background. Its outcome is logged and
/// never prevents the listener from starting.
///
/// # Errors
///
/// Returns an error if the transport cannot be constructed, the address
/// cannot be bound, or the server stops with an I/O error
pub async fn serve(config: RelayConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config).context("failed to build mail transport")?;

    let sender = state.sender_handle();
    tokio::spawn(async move {
        verify_transport(sender.as_ref()).await;
    });

    let app = crate::router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        %addr,
        backend = ?config.mail.backend,
        smtp_host = %config.smtp.host,
        "Server is running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
