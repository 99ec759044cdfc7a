use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tree_match::adapters::http::{app_router, QuizAppState};
use tree_match::adapters::FileDatasetSource;
use tree_match::application::LoadDatasetHandler;
use tree_match::config::{AppConfig, LogFormat, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    let source = Arc::new(FileDatasetSource::new(config.dataset.path()));
    let loader = LoadDatasetHandler::new(source, config.dataset.load_options());
    let dataset = match loader.handle().await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Refusing to start: {}", e);
            return Err(e.into());
        }
    };

    let app = app_router(QuizAppState::new(dataset), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    match server.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
