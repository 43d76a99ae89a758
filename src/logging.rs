// src/logging.rs

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initializes stdout logging through the tracing subscriber. The filter
/// comes from `RUST_LOG` when set, otherwise the crate logs at `info`.
pub fn initialize_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
