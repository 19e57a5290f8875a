use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::record::Professor;

#[derive(Clone, Debug)]
pub struct BackendClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub max_error_body_bytes: usize,
}

impl BackendClientConfig {
    /// Load client configuration from environment variables.
    ///
    /// Optional:
    /// - `DRWHO_BACKEND_URL`: base URL of the directory backend
    ///   (default "http://127.0.0.1:8000")
    /// - `DRWHO_TIMEOUT_SECS`: per-request timeout (default 30)
    /// - `DRWHO_MAX_ERROR_BODY_BYTES`: error body capture limit (default 8 KiB)
    pub fn from_env() -> Self {
        let base_url = std::env::var("DRWHO_BACKEND_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        let timeout = std::env::var("DRWHO_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(30));

        let max_error_body_bytes = std::env::var("DRWHO_MAX_ERROR_BODY_BYTES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(8 * 1024);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            max_error_body_bytes,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned error: status={status} message={message}")]
    Upstream { status: StatusCode, message: String },

    #[error("backend returned non-JSON error: status={status} body={body}")]
    UpstreamBody { status: StatusCode, body: String },
}

/// HTTP client for the directory backend.
///
/// One method per backend endpoint. Every call is a single attempt with a
/// timeout; callers decide what a failure degrades to.
#[derive(Clone)]
pub struct BackendClient {
    config: BackendClientConfig,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(config: BackendClientConfig) -> Result<Self, BackendClientError> {
        let http = reqwest::Client::builder()
            .user_agent("drwho/web")
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &BackendClientConfig {
        &self.config
    }

    /// Ask the question-answering endpoint. Returns the free-text answer.
    pub async fn ask(&self, question: &str) -> Result<String, BackendClientError> {
        let url = format!("{}/api/qa", self.config.base_url);
        let resp = self
            .http
            .post(&url)
            .timeout(self.config.timeout)
            .json(&QaRequest {
                question: question.to_string(),
            })
            .send()
            .await?;
        let parsed: QaResponse =
            Self::parse_json_response(resp, self.config.max_error_body_bytes).await?;
        Ok(parsed.answer)
    }

    /// List professors matching a keyword.
    pub async fn search_professors(
        &self,
        keyword: &str,
    ) -> Result<Vec<Professor>, BackendClientError> {
        let url = format!("{}/api/professors", self.config.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("query", keyword)])
            .timeout(self.config.timeout)
            .send()
            .await?;
        Self::parse_json_response(resp, self.config.max_error_body_bytes).await
    }

    /// Fetch one professor record by identifier.
    pub async fn get_professor(&self, id: i64) -> Result<Professor, BackendClientError> {
        let url = format!("{}/api/professors/{id}", self.config.base_url);
        let resp = self
            .http
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await?;
        Self::parse_json_response(resp, self.config.max_error_body_bytes).await
    }

    async fn parse_json_response<T: for<'de> Deserialize<'de>>(
        resp: reqwest::Response,
        max_error_body_bytes: usize,
    ) -> Result<T, BackendClientError> {
        if resp.status().is_success() {
            let json = resp.json::<T>().await?;
            return Ok(json);
        }
        Err(Self::to_upstream_error(resp, max_error_body_bytes).await)
    }

    async fn to_upstream_error(
        resp: reqwest::Response,
        max_error_body_bytes: usize,
    ) -> BackendClientError {
        let status = resp.status();
        let body = read_limited_text(resp, max_error_body_bytes).await;
        if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(&body) {
            if let Some(detail) = parsed.detail {
                return BackendClientError::Upstream {
                    status,
                    message: detail,
                };
            }
        }
        BackendClientError::UpstreamBody { status, body }
    }
}

async fn read_limited_text(resp: reqwest::Response, max_bytes: usize) -> String {
    match resp.bytes().await {
        Ok(mut b) => {
            if b.len() > max_bytes {
                b.truncate(max_bytes);
            }
            String::from_utf8_lossy(&b).to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to read backend error body");
            "<failed to read error body>".to_string()
        }
    }
}

/// FastAPI-style error envelope: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QaRequest {
    pub question: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QaResponse {
    pub answer: String,
}
