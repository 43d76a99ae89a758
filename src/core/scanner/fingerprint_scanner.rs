// src/core/scanner/fingerprint_scanner.rs

use tracing::{debug, info, warn};

use crate::core::models::{ScanTarget, TechStackReport};

/// Body markers for JavaScript frameworks, paired with the display name
/// appended to the report. Matching is a case-sensitive substring search
/// over the raw response body.
const FRAMEWORK_MARKERS: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue"),
    ("angular", "Angular"),
    ("next", "Next.js"),
];

/// Body markers for content management systems. Checked in order with no
/// early exit, so when several markers are present the last one wins.
const CMS_MARKERS: &[(&str, &str)] = &[
    ("wp-content", "WordPress"),
    ("drupal", "Drupal"),
    ("joomla", "Joomla"),
];

/// Fixed sub-score for a completed fingerprint pass. Detection quality is
/// not graded yet; this is the extension point for confidence-weighted
/// scoring.
const FINGERPRINT_SCORE: u8 = 75;

/// Scans the body for framework markers. The returned list keeps marker
/// order and is not deduplicated against header-derived entries.
fn detect_frameworks(body: &str) -> Vec<String> {
    FRAMEWORK_MARKERS
        .iter()
        .filter(|(marker, _)| body.contains(marker))
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Scans the body for CMS markers, keeping the last match.
fn detect_cms(body: &str) -> Option<String> {
    let mut cms = None;
    for (marker, name) in CMS_MARKERS {
        if body.contains(marker) {
            cms = Some(name.to_string());
        }
    }
    cms
}

/// Runs the technology fingerprint probe against the target.
///
/// Issues a full GET request, reads the `server` and `x-powered-by`
/// response headers, and searches the body text for framework and CMS
/// markers. Any request or body-read failure collapses into the
/// [`TechStackReport::failed`] fallback (score 50, reflecting uncertainty
/// rather than a bad posture); the probe never errors out to its caller.
pub async fn run_fingerprint_scan(client: &reqwest::Client, target: &ScanTarget) -> TechStackReport {
    info!(target = target.as_str(), "Starting fingerprint scan.");

    let response = match client.get(target.as_str()).send().await {
        Ok(res) => res,
        Err(e) => {
            warn!(error = %e, "Fingerprint request failed, returning fallback report.");
            return TechStackReport::failed();
        }
    };

    let headers = response.headers();
    let server = headers
        .get("server")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("Unknown")
        .to_string();

    let mut frameworks = Vec::new();
    // x-powered-by goes into the framework list verbatim, ahead of any
    // body-derived entries.
    if let Some(powered_by) = headers.get("x-powered-by").and_then(|v| v.to_str().ok()) {
        frameworks.push(powered_by.to_string());
    }

    let body = match response.text().await {
        Ok(text) => {
            debug!(bytes = text.len(), "Read response body.");
            text
        }
        Err(e) => {
            warn!(error = %e, "Failed to read response body, returning fallback report.");
            return TechStackReport::failed();
        }
    };

    frameworks.extend(detect_frameworks(&body));
    let cms = detect_cms(&body);

    info!(server = %server, frameworks = frameworks.len(), cms = ?cms, "Fingerprint scan finished.");
    TechStackReport {
        server,
        framework: frameworks,
        cms,
        score: FINGERPRINT_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_frameworks_in_marker_order() {
        let body = "<script src='/next/react-dom.js'></script>";
        assert_eq!(detect_frameworks(body), vec!["React", "Next.js"]);
    }

    #[test]
    fn test_marker_search_is_case_sensitive() {
        // "React" (capitalized) does not match the lowercase marker.
        assert!(detect_frameworks("window.React = {}").is_empty());
        assert_eq!(detect_frameworks("import react from 'react'"), vec!["React"]);
    }

    #[test]
    fn test_no_markers_no_frameworks() {
        assert!(detect_frameworks("<html><body>plain</body></html>").is_empty());
    }

    #[test]
    fn test_detects_single_cms() {
        assert_eq!(detect_cms("/wp-content/themes/x.css"), Some("WordPress".to_string()));
        assert_eq!(detect_cms("powered by drupal"), Some("Drupal".to_string()));
        assert_eq!(detect_cms("a joomla site"), Some("Joomla".to_string()));
        assert_eq!(detect_cms("static site"), None);
    }

    #[test]
    fn test_last_cms_marker_wins() {
        assert_eq!(
            detect_cms("/wp-content/ and also drupal"),
            Some("Drupal".to_string())
        );
    }

    #[tokio::test]
    async fn test_unreachable_target_yields_fallback_report() {
        let client = reqwest::Client::new();
        let target = ScanTarget::parse("http://127.0.0.1:1").unwrap();
        let report = run_fingerprint_scan(&client, &target).await;
        assert_eq!(report, TechStackReport::failed());
        assert_eq!(report.score, 50);
    }
}
