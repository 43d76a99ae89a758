// src/api/mod.rs

pub mod scan;

use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use crate::core::scanner::reputation_scanner::ThreatIntel;
use crate::core::scanner::ssl_scanner::CertificateOracle;

/// Shared state handed to every request: one HTTP client reused across
/// probes, plus the pluggable data sources behind the TLS and reputation
/// probes.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub certificates: Arc<dyn CertificateOracle>,
    pub threat_intel: Arc<dyn ThreatIntel>,
}

/// Builds the application router. Every response passes through the
/// permissive CORS layer; preflight `OPTIONS` requests are answered with a
/// 200 and no body.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/scan", post(scan::perform_scan))
        .with_state(state)
        .layer(cors)
}

async fn root() -> Json<Value> {
    Json(json!({
        "system": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::core::models::ScanTarget;

    struct FixedOracle;

    impl CertificateOracle for FixedOracle {
        fn days_until_expiry(&self, _target: &ScanTarget) -> i64 {
            200
        }
    }

    struct AlwaysClean;

    impl ThreatIntel for AlwaysClean {
        fn assess(&self, _hostname: &str) -> Vec<String> {
            Vec::new()
        }
    }

    fn test_router() -> Router {
        router(AppState {
            client: reqwest::Client::new(),
            certificates: Arc::new(FixedOracle),
            threat_intel: Arc::new(AlwaysClean),
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_preflight_returns_200_with_cors_headers() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/scan")
                    .header(header::ORIGIN, "https://app.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        let allowed = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_string();
        assert!(allowed.contains("POST") && allowed.contains("DELETE"));
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_scheme_rejected_with_400() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/scan")
                    .header(header::ORIGIN, "https://app.example")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"url":"ftp://example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        // Error responses carry the permissive CORS header too.
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert_eq!(
            body_json(response).await["error"],
            "Invalid URL. Must start with http:// or https://"
        );
    }

    #[tokio::test]
    async fn test_missing_url_rejected_with_400() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/scan")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unreadable_body_yields_500_envelope() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/scan")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Failed to perform security scan");
        assert!(json["details"].is_string());
    }
}
