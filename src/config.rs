// src/config.rs

use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, resolved once in `main` and passed down
/// explicitly so the core stays testable without ambient process state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Per-request timeout applied to every outbound probe request. A probe
    /// that times out resolves to its own fallback record instead of
    /// aborting the other three.
    pub probe_timeout: Duration,
}

impl Config {
    /// Reads configuration from `SENTINEL_BIND` and
    /// `SENTINEL_PROBE_TIMEOUT_SECS`, falling back to defaults when unset
    /// or unparseable.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var("SENTINEL_BIND").ok(),
            std::env::var("SENTINEL_PROBE_TIMEOUT_SECS").ok(),
        )
    }

    fn resolve(bind: Option<String>, timeout_secs: Option<String>) -> Self {
        let bind_addr = bind
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));
        let probe_timeout = timeout_secs
            .and_then(|raw| raw.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS));
        Self {
            bind_addr,
            probe_timeout,
        }
    }
}
