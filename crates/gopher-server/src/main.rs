use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gopher_core::GopherConfig;
use gopher_server::{app_with_state, state::AppState};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gopher-server", about = "Gopher translator API server")]
struct Cli {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// HTTP port
    #[arg(long)]
    port: Option<u16>,
    /// Bind address
    #[arg(long)]
    host: Option<String>,
    /// Log level (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<GopherConfig> {
        let mut config = match &self.config {
            Some(path) => GopherConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GopherConfig::default(),
        };
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(level) = self.log_level {
            config.log.level = level;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .init();

    let app = app_with_state(AppState::new());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("gopher server listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
