// src/core/scanner/mod.rs

// Public interface for the `scanner` module: the four probe sub-modules and
// the aggregation entry point.
pub mod fingerprint_scanner;
pub mod headers_scanner;
pub mod reputation_scanner;
pub mod ssl_scanner;

use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::core::models::{
    HeadersReport, ReputationReport, ScanReport, ScanTarget, SslReport, TechStackReport,
};
use self::fingerprint_scanner::run_fingerprint_scan;
use self::headers_scanner::run_headers_scan;
use self::reputation_scanner::{run_reputation_scan, ThreatIntel};
use self::ssl_scanner::{run_ssl_scan, CertificateOracle};

/// Category weights for the overall score. Invariant: they sum to exactly
/// 1.0, so an overall score stays in [0, 100] whenever every sub-score does.
const SSL_WEIGHT: f64 = 0.30;
const HEADERS_WEIGHT: f64 = 0.35;
const TECH_STACK_WEIGHT: f64 = 0.15;
const REPUTATION_WEIGHT: f64 = 0.20;

/// Combines the four sub-scores into the overall score, rounded to the
/// nearest integer. Pure arithmetic; no I/O.
fn combine_scores(
    ssl: &SslReport,
    headers: &HeadersReport,
    tech_stack: &TechStackReport,
    reputation: &ReputationReport,
) -> u8 {
    let weighted = f64::from(ssl.score) * SSL_WEIGHT
        + f64::from(headers.score) * HEADERS_WEIGHT
        + f64::from(tech_stack.score) * TECH_STACK_WEIGHT
        + f64::from(reputation.score) * REPUTATION_WEIGHT;
    weighted.round() as u8
}

/// Runs all four probes concurrently and aggregates their results into a
/// single report.
///
/// The probes are independent of one another, so they are launched together
/// with `tokio::join!` and joined at a single barrier; total latency is
/// bounded by the slowest probe rather than their sum. Each probe absorbs
/// its own failures into a fallback record, so aggregation itself cannot
/// fail once it has a valid target.
pub async fn run_full_scan(
    client: &reqwest::Client,
    oracle: &dyn CertificateOracle,
    intel: &dyn ThreatIntel,
    target: &ScanTarget,
) -> ScanReport {
    info!(target = target.as_str(), "Starting full scan.");

    let (ssl, headers, tech_stack, reputation) = tokio::join!(
        run_ssl_scan(client, oracle, target),
        run_headers_scan(client, target),
        run_fingerprint_scan(client, target),
        run_reputation_scan(intel, target)
    );

    let overall_score = combine_scores(&ssl, &headers, &tech_stack, &reputation);
    info!(overall_score, "Full scan finished.");

    ScanReport {
        url: target.as_str().to_string(),
        ssl,
        headers,
        tech_stack,
        reputation,
        overall_score,
        scan_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
