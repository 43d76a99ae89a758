// src/core/scanner/headers_scanner.rs

use reqwest::header::HeaderMap;
use tracing::{info, warn};

use crate::core::models::{HeadersReport, ScanTarget};

/// Per-header weights. Weights sum to 100 so the sub-score lands in [0, 100]
/// without clamping: HSTS 20, CSP 25, X-Frame-Options 20,
/// Permissions-Policy 15, X-Content-Type-Options 10, Referrer-Policy 10.
const HSTS_WEIGHT: u8 = 20;
const CSP_WEIGHT: u8 = 25;
const X_FRAME_OPTIONS_WEIGHT: u8 = 20;
const PERMISSIONS_POLICY_WEIGHT: u8 = 15;
const X_CONTENT_TYPE_OPTIONS_WEIGHT: u8 = 10;
const REFERRER_POLICY_WEIGHT: u8 = 10;

/// Builds the report from a response header map. Presence is binary; the
/// header's value is never inspected.
fn grade_headers(headers: &HeaderMap) -> HeadersReport {
    let mut report = HeadersReport {
        hsts: headers.contains_key("strict-transport-security"),
        csp: headers.contains_key("content-security-policy"),
        x_frame_options: headers.contains_key("x-frame-options"),
        permissions_policy: headers.contains_key("permissions-policy"),
        x_content_type_options: headers.contains_key("x-content-type-options"),
        referrer_policy: headers.contains_key("referrer-policy"),
        score: 0,
    };

    let mut score = 0u8;
    if report.hsts {
        score += HSTS_WEIGHT;
    }
    if report.csp {
        score += CSP_WEIGHT;
    }
    if report.x_frame_options {
        score += X_FRAME_OPTIONS_WEIGHT;
    }
    if report.permissions_policy {
        score += PERMISSIONS_POLICY_WEIGHT;
    }
    if report.x_content_type_options {
        score += X_CONTENT_TYPE_OPTIONS_WEIGHT;
    }
    if report.referrer_policy {
        score += REFERRER_POLICY_WEIGHT;
    }
    report.score = score;
    report
}

/// Runs the security-header probe against the target.
///
/// Issues a header-only HEAD request and tests for the presence of six
/// security headers. Any request failure collapses into the all-false,
/// zero-score default; the probe never errors out to its caller.
pub async fn run_headers_scan(client: &reqwest::Client, target: &ScanTarget) -> HeadersReport {
    info!(target = target.as_str(), "Starting security headers scan.");

    match client.head(target.as_str()).send().await {
        Ok(response) => {
            let report = grade_headers(response.headers());
            info!(status = %response.status(), score = report.score, "Headers scan finished.");
            report
        }
        Err(e) => {
            warn!(error = %e, "Headers scan request failed, returning empty report.");
            HeadersReport::default()
        }
    }
}
