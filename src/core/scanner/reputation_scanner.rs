// src/core/scanner/reputation_scanner.rs

use rand::Rng;
use tracing::{info, warn};
use url::Url;

use crate::core::models::{ReputationReport, ScanTarget};

/// Threat source for the reputation probe. Returns the threat labels found
/// for a hostname; an empty list means the host is clean. Implementations
/// can back this with a real threat-intelligence client without touching
/// the probe.
pub trait ThreatIntel: Send + Sync {
    fn assess(&self, hostname: &str) -> Vec<String>;
}

/// Placeholder threat source: flags roughly one host in ten. Stands in
/// until a real intelligence feed is wired in.
pub struct SyntheticThreatIntel;

impl ThreatIntel for SyntheticThreatIntel {
    fn assess(&self, _hostname: &str) -> Vec<String> {
        if rand::thread_rng().gen_bool(0.1) {
            vec!["Potential phishing detected".to_string()]
        } else {
            Vec::new()
        }
    }
}

/// Runs the reputation probe against the target.
///
/// Parses the hostname out of the URL and asks the threat source about it.
/// A URL whose hostname cannot be parsed is treated as clean, not as an
/// error; the probe never errors out to its caller and performs no network
/// I/O of its own.
pub async fn run_reputation_scan(intel: &dyn ThreatIntel, target: &ScanTarget) -> ReputationReport {
    info!(target = target.as_str(), "Starting reputation scan.");

    let hostname = match Url::parse(target.as_str())
        .ok()
        .and_then(|url| url.host_str().map(String::from))
    {
        Some(host) => host,
        None => {
            warn!("Could not parse hostname, treating target as clean.");
            return ReputationReport::clean();
        }
    };

    let threats = intel.assess(&hostname);
    let report = if threats.is_empty() {
        ReputationReport::clean()
    } else {
        ReputationReport::flagged(threats)
    };
    info!(safe = report.safe, score = report.score, "Reputation scan finished.");
    report
}
