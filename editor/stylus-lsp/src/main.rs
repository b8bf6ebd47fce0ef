//! Stylus Language Server executable
//!
//! Speaks LSP over stdio; logs go to stderr.

use stylus_lsp::{EngineConfig, LspServer};
use tower_lsp::{LspService, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Logged once the subscriber is installed, since the config picks the level
    let loaded = match std::env::current_dir() {
        Ok(dir) => EngineConfig::load_default(&dir),
        Err(_) => Ok(EngineConfig::default()),
    };
    let config = loaded.as_ref().cloned().unwrap_or_default();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.engine.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = &loaded {
        tracing::warn!("{}; using default configuration", e);
    }
    tracing::info!("Starting {}", config.engine.name);

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| LspServer::with_config(client, config));
    Server::new(stdin, stdout, socket).serve(service).await;
}
