// src/main.rs

use std::sync::Arc;

use color_eyre::eyre::Result;
use tracing::info;

mod api;
mod config;
mod core;
mod logging;

use crate::api::AppState;
use crate::config::Config;
use crate::core::scanner::reputation_scanner::SyntheticThreatIntel;
use crate::core::scanner::ssl_scanner::SyntheticCertificateOracle;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    logging::initialize_logging()?;

    let config = Config::from_env();

    // One client for all probes; the timeout bounds each probe request
    // individually, so a slow target degrades that probe's sub-score
    // without holding up the scan past the slowest remaining probe.
    let client = reqwest::Client::builder()
        .user_agent("SentinelRS/0.1")
        .timeout(config.probe_timeout)
        .build()?;

    let state = AppState {
        client,
        certificates: Arc::new(SyntheticCertificateOracle),
        threat_intel: Arc::new(SyntheticThreatIntel),
    };
    let app = api::router(state);

    info!(addr = %config.bind_addr, "Listening for scan requests.");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
