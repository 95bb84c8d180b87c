//! Grassroots server
//!
//! Entry point: loads configuration and serves the page.

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;

use grassroots_app::config::AppConfig;
use grassroots_app::{server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before anything reads the environment
    let _ = dotenv();

    telemetry::init();

    let config = AppConfig::load().context("failed to load configuration")?;

    info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        rpc_endpoint = %config.chain.rpc_endpoint,
        "Configuration loaded"
    );

    server::start_server(Arc::new(config))
        .await
        .context("server exited with an error")
}
