// src/core/models.rs

use serde::{Deserialize, Serialize};

/// A validated scan target. Holds the raw URL string as supplied by the
/// caller; construction guarantees it is non-empty and carries an
/// `http://` or `https://` scheme prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget(String);

/// The fixed message returned to callers that submit a URL without an
/// `http://` or `https://` prefix. Part of the wire contract.
pub const INVALID_URL_MESSAGE: &str = "Invalid URL. Must start with http:// or https://";

impl ScanTarget {
    /// Validates the raw input and wraps it. Scheme matching is a plain
    /// prefix test, not a full URL parse: anything beyond the scheme is
    /// the remote server's problem.
    pub fn parse(raw: &str) -> Result<Self, &'static str> {
        if raw.is_empty() || !(raw.starts_with("http://") || raw.starts_with("https://")) {
            return Err(INVALID_URL_MESSAGE);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the target uses the `https` scheme.
    pub fn is_secure(&self) -> bool {
        self.0.starts_with("https://")
    }
}

// --- TLS/Certificate Probe Models ---

/// Result of the TLS/certificate probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SslReport {
    pub valid: bool,
    pub issuer: String,
    pub expiry_date: String,
    pub days_until_expiry: i64,
    pub protocol: String,
    pub score: u8,
}

impl SslReport {
    /// The worst-case record every connection failure collapses into. The
    /// probe never surfaces an error to the aggregator.
    pub fn failed() -> Self {
        Self {
            valid: false,
            issuer: "Unknown".to_string(),
            expiry_date: "N/A".to_string(),
            days_until_expiry: 0,
            protocol: "Unknown".to_string(),
            score: 0,
        }
    }
}

// --- Security Header Probe Models ---

/// Presence flags for the six security headers the probe inspects, plus the
/// weighted sub-score. Presence is binary; header values are not inspected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeadersReport {
    pub hsts: bool,
    pub csp: bool,
    pub x_frame_options: bool,
    pub permissions_policy: bool,
    pub x_content_type_options: bool,
    pub referrer_policy: bool,
    pub score: u8,
}

// --- Technology Fingerprint Probe Models ---

/// Result of the technology fingerprint probe. `framework` keeps detection
/// order and duplicates; `cms` serializes as `null` when nothing matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TechStackReport {
    pub server: String,
    pub framework: Vec<String>,
    pub cms: Option<String>,
    pub score: u8,
}

impl TechStackReport {
    /// Fallback for a failed fetch. Score 50 rather than 0: an unreachable
    /// stack is unknown, not necessarily insecure.
    pub fn failed() -> Self {
        Self {
            server: "Unknown".to_string(),
            framework: Vec::new(),
            cms: None,
            score: 50,
        }
    }
}

// --- Reputation Probe Models ---

/// Result of the reputation probe. Invariant: a safe target has an empty
/// threat list and scores 100; a flagged target always scores 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReputationReport {
    pub safe: bool,
    pub threats: Vec<String>,
    pub score: u8,
}

impl ReputationReport {
    pub fn clean() -> Self {
        Self {
            safe: true,
            threats: Vec::new(),
            score: 100,
        }
    }

    pub fn flagged(threats: Vec<String>) -> Self {
        Self {
            safe: false,
            threats,
            score: 0,
        }
    }
}

// --- Main Report ---

/// The composed result of one full scan: all four probe records, the
/// weighted overall score, and the completion timestamp. Built exactly once
/// per request and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub url: String,
    pub ssl: SslReport,
    pub headers: HeadersReport,
    pub tech_stack: TechStackReport,
    pub reputation: ReputationReport,
    pub overall_score: u8,
    pub scan_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_target_accepts_http_and_https() {
        assert!(ScanTarget::parse("http://example.com").is_ok());
        assert!(ScanTarget::parse("https://example.com").is_ok());
    }

    #[test]
    fn test_scan_target_rejects_other_schemes() {
        assert_eq!(ScanTarget::parse("ftp://example.com"), Err(INVALID_URL_MESSAGE));
        assert_eq!(ScanTarget::parse("example.com"), Err(INVALID_URL_MESSAGE));
        assert_eq!(ScanTarget::parse(""), Err(INVALID_URL_MESSAGE));
    }

    #[test]
    fn test_scan_target_scheme_detection() {
        assert!(ScanTarget::parse("https://example.com").unwrap().is_secure());
        assert!(!ScanTarget::parse("http://example.com").unwrap().is_secure());
    }

    #[test]
    fn test_ssl_failed_record_is_zeroed() {
        let report = SslReport::failed();
        assert!(!report.valid);
        assert_eq!(report.issuer, "Unknown");
        assert_eq!(report.expiry_date, "N/A");
        assert_eq!(report.days_until_expiry, 0);
        assert_eq!(report.protocol, "Unknown");
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = ScanReport {
            url: "https://example.com".to_string(),
            ssl: SslReport::failed(),
            headers: HeadersReport::default(),
            tech_stack: TechStackReport::failed(),
            reputation: ReputationReport::clean(),
            overall_score: 27,
            scan_date: "2026-01-01T00:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("techStack").is_some());
        assert!(json.get("overallScore").is_some());
        assert!(json.get("scanDate").is_some());
        assert!(json["headers"].get("xFrameOptions").is_some());
        assert!(json["techStack"]["cms"].is_null());
    }
}
