//! Listener lifecycle.

use crate::{AppState, ServerConfig, create_router};
use storyforge_error::{ServerError, ServerErrorKind, StoryforgeResult};
use tokio::net::TcpListener;

/// Binds `config.address()` and serves the API until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server loop fails.
#[tracing::instrument(skip_all, fields(address = %config.address()))]
pub async fn serve(config: &ServerConfig, state: AppState) -> StoryforgeResult<()> {
    let address = config.address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: address.clone(),
            message: e.to_string(),
        })
    })?;

    tracing::info!(address = %address, "Storyforge API listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    tracing::info!("Storyforge API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
