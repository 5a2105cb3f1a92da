//! Grey City terminal client entry point.
use std::path::PathBuf;

use anyhow::Result;
use client_core::EngineConfig;
use client_tui::{TuiApp, logging};
use gateway::GatewayConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let log_dir = std::env::var_os("GREYCITY_LOG_DIR").map(PathBuf::from);
    let _log_guard = logging::setup_logging(log_dir)?;

    let gateway_config = GatewayConfig::from_env();
    let engine_config = EngineConfig::from_env();

    tracing::info!(server = %gateway_config.base_url, "starting Grey City client");

    TuiApp::builder()
        .gateway_config(gateway_config)
        .engine_config(engine_config)
        .build()?
        .run()
        .await?;

    tracing::info!("client shutdown complete");
    Ok(())
}
