use prompt_relay::{server, Config, GeminiProvider, PromptRelay};
use std::error::Error;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let provider = GeminiProvider::new(config.api_key.clone(), config.model.clone())?;
    let relay = PromptRelay::new(Arc::new(provider));
    let app = server::router(relay);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(model = %config.model, "listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
